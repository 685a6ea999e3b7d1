// src/platform/macos.rs

//! Distributed notification center subscription (CoreFoundation).

use std::ffi::c_void;
use std::ptr;

use anyhow::anyhow;
use core_foundation::base::{CFIndex, TCFType};
use core_foundation::runloop::CFRunLoop;
use core_foundation::string::{CFString, CFStringRef};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::engine::RuntimeEvent;
use crate::errors::Result;
use crate::types::ScreenEvent;

use super::forward_event;

type CFNotificationCenterRef = *mut c_void;

type CFNotificationCallback = extern "C" fn(
    center: CFNotificationCenterRef,
    observer: *mut c_void,
    name: CFStringRef,
    object: *const c_void,
    user_info: *const c_void,
);

/// `CFNotificationSuspensionBehaviorDeliverImmediately`
const DELIVER_IMMEDIATELY: CFIndex = 4;

#[link(name = "CoreFoundation", kind = "framework")]
unsafe extern "C" {
    fn CFNotificationCenterGetDistributedCenter() -> CFNotificationCenterRef;

    fn CFNotificationCenterAddObserver(
        center: CFNotificationCenterRef,
        observer: *const c_void,
        call_back: CFNotificationCallback,
        name: CFStringRef,
        object: *const c_void,
        suspension_behavior: CFIndex,
    );
}

/// Per-event registration. Leaked: observers live for the whole process.
struct Observer {
    event: ScreenEvent,
    tx: mpsc::Sender<RuntimeEvent>,
    _name: CFString,
}

extern "C" fn on_notification(
    _center: CFNotificationCenterRef,
    observer: *mut c_void,
    _name: CFStringRef,
    _object: *const c_void,
    _user_info: *const c_void,
) {
    if observer.is_null() {
        return;
    }
    // SAFETY: `observer` is the leaked `Observer` registered below; it is
    // never freed.
    let observer = unsafe { &*(observer as *const Observer) };
    debug!(event = %observer.event, "notification delivered");
    forward_event(&observer.tx, observer.event);
}

pub(super) fn run_event_loop(tx: mpsc::Sender<RuntimeEvent>) -> Result<()> {
    // SAFETY: plain CoreFoundation getter; returns a process-wide singleton.
    let center = unsafe { CFNotificationCenterGetDistributedCenter() };
    if center.is_null() {
        return Err(anyhow!("distributed notification center is unavailable").into());
    }

    for event in ScreenEvent::ALL {
        let name = CFString::from_static_string(event.notification_name());
        let name_ref = name.as_concrete_TypeRef();
        let observer: &'static Observer = Box::leak(Box::new(Observer {
            event,
            tx: tx.clone(),
            _name: name,
        }));

        // SAFETY: `center` is valid, `observer` outlives the registration,
        // and `name_ref` is kept alive by the observer.
        unsafe {
            CFNotificationCenterAddObserver(
                center,
                observer as *const Observer as *const c_void,
                on_notification,
                name_ref,
                ptr::null(),
                DELIVER_IMMEDIATELY,
            );
        }
        debug!(notification = event.notification_name(), "observer registered");
    }
    drop(tx);

    info!("waiting for screen lock/unlock events");
    CFRunLoop::run_current();

    Ok(())
}
