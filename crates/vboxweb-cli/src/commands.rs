use anyhow::Context;
use tracing::{info, instrument, warn};
use vboxweb_api::enums::{LockType, MachineState};
use vboxweb_api::ops::*;
use vboxweb_api::structs::IMediumAttachment;

use crate::config::Frontend;
use crate::session::WebSession;

#[instrument(skip_all)]
pub fn version(session: &WebSession<'_>) -> anyhow::Result<()> {
    let port = session.port();
    let version = port
        .virtualbox_get_version(IVirtualBoxGetVersion {
            this: session.vbox(),
        })?
        .returnval;
    let api_version = port
        .virtualbox_get_api_version(IVirtualBoxGetAPIVersion {
            this: session.vbox(),
        })?
        .returnval;

    println!("VirtualBox {version} (API {api_version})");
    Ok(())
}

#[instrument(skip_all)]
pub fn list(session: &WebSession<'_>) -> anyhow::Result<()> {
    let port = session.port();
    let machines = port
        .virtualbox_get_machines(IVirtualBoxGetMachines {
            this: session.vbox(),
        })?
        .returnval;
    info!(count = machines.len(), "machines registered");

    for machine in machines {
        let accessible = port
            .machine_get_accessible(IMachineGetAccessible {
                this: machine.clone(),
            })?
            .returnval;
        if !accessible {
            println!("{machine:<69} inaccessible");
            continue;
        }

        let name = port
            .machine_get_name(IMachineGetName {
                this: machine.clone(),
            })?
            .returnval;
        let id = port
            .machine_get_id(IMachineGetId {
                this: machine.clone(),
            })?
            .returnval;
        let state = port
            .machine_get_state(IMachineGetState { this: machine })?
            .returnval;

        println!("{name:<32} {id:<36} {state}");
    }

    Ok(())
}

fn describe_attachment(session: &WebSession<'_>, attachment: &IMediumAttachment) -> String {
    let location = if attachment.medium.is_empty() {
        "(empty)".to_owned()
    } else {
        session
            .port()
            .medium_get_location(IMediumGetLocation {
                this: attachment.medium.clone(),
            })
            .map_or_else(
                |e| {
                    warn!(error = %e, "cannot read medium location");
                    "(unknown)".to_owned()
                },
                |response| response.returnval,
            )
    };

    format!(
        "{} {}:{} {} {}",
        attachment.controller, attachment.port, attachment.device, attachment.r#type, location
    )
}

#[instrument(skip(session))]
pub fn info(session: &WebSession<'_>, name_or_id: &str) -> anyhow::Result<()> {
    let port = session.port();
    let machine = session.find_machine(name_or_id)?;

    let name = port
        .machine_get_name(IMachineGetName {
            this: machine.clone(),
        })?
        .returnval;
    let id = port
        .machine_get_id(IMachineGetId {
            this: machine.clone(),
        })?
        .returnval;
    let os_type = port
        .machine_get_os_type_id(IMachineGetOSTypeId {
            this: machine.clone(),
        })?
        .returnval;
    let cpus = port
        .machine_get_cpu_count(IMachineGetCPUCount {
            this: machine.clone(),
        })?
        .returnval;
    let memory = port
        .machine_get_memory_size(IMachineGetMemorySize {
            this: machine.clone(),
        })?
        .returnval;
    let state = port
        .machine_get_state(IMachineGetState {
            this: machine.clone(),
        })?
        .returnval;
    let attachments = port
        .machine_get_medium_attachments(IMachineGetMediumAttachments { this: machine })?
        .returnval;

    println!("Name:     {name}");
    println!("UUID:     {id}");
    println!("OS type:  {os_type}");
    println!("CPUs:     {cpus}");
    println!("Memory:   {memory} MB");
    println!("State:    {state}");
    println!("Storage:");
    for attachment in &attachments {
        println!("  {}", describe_attachment(session, attachment));
    }

    Ok(())
}

#[instrument(skip(session))]
pub fn start(session: &WebSession<'_>, name_or_id: &str, frontend: Frontend) -> anyhow::Result<()> {
    let port = session.port();
    let machine = session.find_machine(name_or_id)?;
    let session_object = session.session_object()?;

    let progress = port
        .machine_launch_vm_process(IMachineLaunchVMProcess {
            this: machine,
            session: session_object.clone(),
            name: frontend.as_str().to_owned(),
            environment_changes: Vec::new(),
        })
        .with_context(|| format!("cannot launch '{name_or_id}'"))?
        .returnval;

    let result = session.wait_for(&progress, "power up");
    unlock(session, &session_object);
    result?;

    println!("{name_or_id} started ({})", frontend.as_str());
    Ok(())
}

#[instrument(skip(session))]
pub fn stop(session: &WebSession<'_>, name_or_id: &str) -> anyhow::Result<()> {
    let port = session.port();
    let machine = session.find_machine(name_or_id)?;

    let state = port
        .machine_get_state(IMachineGetState {
            this: machine.clone(),
        })?
        .returnval;
    if matches!(
        state,
        MachineState::PoweredOff | MachineState::Aborted | MachineState::Saved
    ) {
        println!("{name_or_id} is not running ({state})");
        return Ok(());
    }

    let session_object = session.session_object()?;
    port.machine_lock_machine(IMachineLockMachine {
        this: machine,
        session: session_object.clone(),
        lock_type: LockType::Shared,
    })
    .with_context(|| format!("cannot lock '{name_or_id}'"))?;

    let result = power_down(session, &session_object);
    unlock(session, &session_object);
    result?;

    println!("{name_or_id} stopped");
    Ok(())
}

fn power_down(session: &WebSession<'_>, session_object: &str) -> anyhow::Result<()> {
    let port = session.port();
    let console = port
        .session_get_console(ISessionGetConsole {
            this: session_object.to_owned(),
        })?
        .returnval;
    let progress = port
        .console_power_down(IConsolePowerDown { this: console })?
        .returnval;
    session.wait_for(&progress, "power down")
}

fn unlock(session: &WebSession<'_>, session_object: &str) {
    if let Err(e) = session.port().session_unlock_machine(ISessionUnlockMachine {
        this: session_object.to_owned(),
    }) {
        warn!(error = %e, "cannot unlock the session");
    }
}
