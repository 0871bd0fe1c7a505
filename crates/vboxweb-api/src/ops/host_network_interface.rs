use crate::enums::{
    HostNetworkInterfaceMediumType, HostNetworkInterfaceStatus, HostNetworkInterfaceType,
};
use vboxweb_soap::WireStruct;

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getName")]
pub struct IHostNetworkInterfaceGetName {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getNameResponse", default)]
pub struct IHostNetworkInterfaceGetNameResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getShortName")]
pub struct IHostNetworkInterfaceGetShortName {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getShortNameResponse", default)]
pub struct IHostNetworkInterfaceGetShortNameResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getId")]
pub struct IHostNetworkInterfaceGetId {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getIdResponse", default)]
pub struct IHostNetworkInterfaceGetIdResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getNetworkName")]
pub struct IHostNetworkInterfaceGetNetworkName {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getNetworkNameResponse", default)]
pub struct IHostNetworkInterfaceGetNetworkNameResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getDHCPEnabled")]
pub struct IHostNetworkInterfaceGetDHCPEnabled {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getDHCPEnabledResponse", default)]
pub struct IHostNetworkInterfaceGetDHCPEnabledResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getIPAddress")]
pub struct IHostNetworkInterfaceGetIPAddress {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getIPAddressResponse", default)]
pub struct IHostNetworkInterfaceGetIPAddressResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getNetworkMask")]
pub struct IHostNetworkInterfaceGetNetworkMask {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getNetworkMaskResponse", default)]
pub struct IHostNetworkInterfaceGetNetworkMaskResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getIPV6Supported")]
pub struct IHostNetworkInterfaceGetIPV6Supported {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getIPV6SupportedResponse", default)]
pub struct IHostNetworkInterfaceGetIPV6SupportedResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getIPV6Address")]
pub struct IHostNetworkInterfaceGetIPV6Address {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getIPV6AddressResponse", default)]
pub struct IHostNetworkInterfaceGetIPV6AddressResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getIPV6NetworkMaskPrefixLength")]
pub struct IHostNetworkInterfaceGetIPV6NetworkMaskPrefixLength {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getIPV6NetworkMaskPrefixLengthResponse", default)]
pub struct IHostNetworkInterfaceGetIPV6NetworkMaskPrefixLengthResponse {
    pub returnval: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getHardwareAddress")]
pub struct IHostNetworkInterfaceGetHardwareAddress {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getHardwareAddressResponse", default)]
pub struct IHostNetworkInterfaceGetHardwareAddressResponse {
    pub returnval: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getMediumType")]
pub struct IHostNetworkInterfaceGetMediumType {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getMediumTypeResponse", default)]
pub struct IHostNetworkInterfaceGetMediumTypeResponse {
    pub returnval: HostNetworkInterfaceMediumType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getStatus")]
pub struct IHostNetworkInterfaceGetStatus {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getStatusResponse", default)]
pub struct IHostNetworkInterfaceGetStatusResponse {
    pub returnval: HostNetworkInterfaceStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getInterfaceType")]
pub struct IHostNetworkInterfaceGetInterfaceType {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getInterfaceTypeResponse", default)]
pub struct IHostNetworkInterfaceGetInterfaceTypeResponse {
    pub returnval: HostNetworkInterfaceType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getWireless")]
pub struct IHostNetworkInterfaceGetWireless {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_getWirelessResponse", default)]
pub struct IHostNetworkInterfaceGetWirelessResponse {
    pub returnval: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_enableStaticIPConfig")]
pub struct IHostNetworkInterfaceEnableStaticIPConfig {
    #[wire(rename = "_this")]
    pub this: String,
    #[wire(rename = "IPAddress")]
    pub ip_address: String,
    pub network_mask: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_enableStaticIPConfigResponse", default)]
pub struct IHostNetworkInterfaceEnableStaticIPConfigResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_enableStaticIPConfigV6")]
pub struct IHostNetworkInterfaceEnableStaticIPConfigV6 {
    #[wire(rename = "_this")]
    pub this: String,
    #[wire(rename = "IPV6Address")]
    pub ipv6_address: String,
    #[wire(rename = "IPV6NetworkMaskPrefixLength")]
    pub ipv6_network_mask_prefix_length: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_enableStaticIPConfigV6Response", default)]
pub struct IHostNetworkInterfaceEnableStaticIPConfigV6Response {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_enableDynamicIPConfig")]
pub struct IHostNetworkInterfaceEnableDynamicIPConfig {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_enableDynamicIPConfigResponse", default)]
pub struct IHostNetworkInterfaceEnableDynamicIPConfigResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_DHCPRediscover")]
pub struct IHostNetworkInterfaceDHCPRediscover {
    #[wire(rename = "_this")]
    pub this: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, WireStruct)]
#[wire(element = "IHostNetworkInterface_DHCPRediscoverResponse", default)]
pub struct IHostNetworkInterfaceDHCPRediscoverResponse {}
