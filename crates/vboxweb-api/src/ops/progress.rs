//! Progress of long running asynchronous operations.

use vboxweb_soap::WireStruct;

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getId")]
pub struct IProgressGetId {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getIdResponse", default)]
pub struct IProgressGetIdResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getDescription")]
pub struct IProgressGetDescription {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getDescriptionResponse", default)]
pub struct IProgressGetDescriptionResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getInitiator")]
pub struct IProgressGetInitiator {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getInitiatorResponse", default)]
pub struct IProgressGetInitiatorResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getCancelable")]
pub struct IProgressGetCancelable {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getCancelableResponse", default)]
pub struct IProgressGetCancelableResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getPercent")]
pub struct IProgressGetPercent {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getPercentResponse", default)]
pub struct IProgressGetPercentResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getTimeRemaining")]
pub struct IProgressGetTimeRemaining {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getTimeRemainingResponse", default)]
pub struct IProgressGetTimeRemainingResponse {
    pub returnval: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getCompleted")]
pub struct IProgressGetCompleted {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getCompletedResponse", default)]
pub struct IProgressGetCompletedResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getCanceled")]
pub struct IProgressGetCanceled {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getCanceledResponse", default)]
pub struct IProgressGetCanceledResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getResultCode")]
pub struct IProgressGetResultCode {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getResultCodeResponse", default)]
pub struct IProgressGetResultCodeResponse {
    pub returnval: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getErrorInfo")]
pub struct IProgressGetErrorInfo {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getErrorInfoResponse", default)]
pub struct IProgressGetErrorInfoResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getOperationCount")]
pub struct IProgressGetOperationCount {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getOperationCountResponse", default)]
pub struct IProgressGetOperationCountResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getOperation")]
pub struct IProgressGetOperation {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getOperationResponse", default)]
pub struct IProgressGetOperationResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getOperationDescription")]
pub struct IProgressGetOperationDescription {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getOperationDescriptionResponse", default)]
pub struct IProgressGetOperationDescriptionResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getOperationPercent")]
pub struct IProgressGetOperationPercent {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getOperationPercentResponse", default)]
pub struct IProgressGetOperationPercentResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getOperationWeight")]
pub struct IProgressGetOperationWeight {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getOperationWeightResponse", default)]
pub struct IProgressGetOperationWeightResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getTimeout")]
pub struct IProgressGetTimeout {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getTimeoutResponse", default)]
pub struct IProgressGetTimeoutResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_setTimeout")]
pub struct IProgressSetTimeout {
    #[wire(rename = "_this")]
    pub this: String,
    pub timeout: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_setTimeoutResponse", default)]
pub struct IProgressSetTimeoutResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getEventSource")]
pub struct IProgressGetEventSource {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_getEventSourceResponse", default)]
pub struct IProgressGetEventSourceResponse {
    pub returnval: String,
}

/// Blocks on the server for up to `timeout` milliseconds, or forever with `-1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_waitForCompletion")]
pub struct IProgressWaitForCompletion {
    #[wire(rename = "_this")]
    pub this: String,
    pub timeout: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_waitForCompletionResponse", default)]
pub struct IProgressWaitForCompletionResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_waitForOperationCompletion")]
pub struct IProgressWaitForOperationCompletion {
    #[wire(rename = "_this")]
    pub this: String,
    pub operation: u32,
    pub timeout: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_waitForOperationCompletionResponse", default)]
pub struct IProgressWaitForOperationCompletionResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_cancel")]
pub struct IProgressCancel {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IProgress_cancelResponse", default)]
pub struct IProgressCancelResponse {}
