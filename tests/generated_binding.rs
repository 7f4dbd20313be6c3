// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The committed bindings under `golden/` are what the renderer emits for a
//! small signature list. The Rust one is compiled into this test and driven
//! against `extern "C"` functions standing in for the native exports.

use bridgegen::encoding::EncodingRules;
use bridgegen::model::{SignatureModel, SignatureSpec};
use bridgegen::render::{build_binding, render, BindingOptions, TargetKind};

fn render_golden(kind: TargetKind) -> String {
    let model = SignatureModel::new(vec![
        SignatureSpec::new("GetConfig"),
        SignatureSpec::new("DeleteUser").plain("id"),
        SignatureSpec::new("ModifyProject").plain("id").payload("project"),
    ])
    .unwrap();
    let binding = build_binding(
        &model,
        &EncodingRules::standard(),
        &BindingOptions {
            version: "0.2.0".to_string(),
            library_stem: "flywheelBridge".to_string(),
        },
    );
    render(&binding, kind).text
}

#[test]
fn rust_binding_matches_golden() {
    assert_eq!(render_golden(TargetKind::Rust), include_str!("golden/flywheel.rs"));
}

#[test]
fn python_binding_matches_golden() {
    assert_eq!(render_golden(TargetKind::Python), include_str!("golden/flywheel.py"));
}

#[test]
fn c_header_matches_golden() {
    assert_eq!(render_golden(TargetKind::C), include_str!("golden/flywheelBridge.h"));
}

#[allow(dead_code)]
mod flywheel {
    include!("golden/flywheel.rs");

    mod client {
        use super::*;

        use std::cell::RefCell;
        use std::ffi::{CStr, CString};

        use serde_json::json;

        thread_local! {
            // Library-owned response buffer; valid until the next call on this thread.
            static RESPONSE: RefCell<CString> = RefCell::new(CString::default());
        }

        fn reply(body: &str) -> *mut c_char {
            RESPONSE.with(|cell| {
                *cell.borrow_mut() = CString::new(body).unwrap();
                cell.borrow().as_ptr() as *mut c_char
            })
        }

        unsafe fn text(pointer: *const c_char) -> String {
            CStr::from_ptr(pointer).to_str().unwrap().to_string()
        }

        unsafe extern "C" fn test_bridge(name: *const c_char) -> *mut c_char {
            reply(&format!("Hello {}", text(name)))
        }

        unsafe extern "C" fn get_config(_key: *const c_char, status: *mut c_int) -> *mut c_char {
            *status = 403;
            reply(r#"{"message":"Forbidden"}"#)
        }

        unsafe extern "C" fn delete_user(
            _key: *const c_char,
            _id: *const c_char,
            status: *mut c_int,
        ) -> *mut c_char {
            *status = 0;
            std::ptr::null_mut()
        }

        // Echoes every argument back as received.
        unsafe extern "C" fn modify_project(
            key: *const c_char,
            id: *const c_char,
            project: *const c_char,
            status: *mut c_int,
        ) -> *mut c_char {
            *status = 0;
            let body = json!({
                "data": { "key": text(key), "id": text(id), "project": text(project) }
            });
            reply(&body.to_string())
        }

        fn bridge() -> Bridge {
            Bridge {
                exports: Exports {
                    test_bridge,
                    get_config,
                    delete_user,
                    modify_project,
                },
                _library: NativeLibrary::this().unwrap(),
            }
        }

        #[test]
        fn test_bridge_greets() {
            assert_eq!(bridge().test_bridge("Grüße").unwrap(), "Hello Grüße");
        }

        #[test]
        fn payload_is_serialized_exactly_once() {
            let bridge = bridge();
            let client = bridge.client("dev.flywheel.io:secret").unwrap();
            let project = json!({ "label": "Neuro", "tags": ["mri"] });

            let data = client.modify_project(7, &project).unwrap().unwrap();

            assert_eq!(data["key"], "dev.flywheel.io:secret");
            assert_eq!(data["id"], "7");
            assert_eq!(data["project"], serde_json::to_string(&project).unwrap());
        }

        #[test]
        fn api_error_is_returned() {
            let bridge = bridge();
            let err = bridge.client("a:b").unwrap().get_config().unwrap_err();
            assert_eq!(err.status(), Some(403));
            assert_eq!(err.to_string(), "Forbidden");
        }

        #[test]
        fn empty_success_is_none() {
            let bridge = bridge();
            assert_eq!(bridge.client("a:b").unwrap().delete_user("u1").unwrap(), None);
        }

        #[test]
        fn malformed_key_is_rejected() {
            let bridge = bridge();
            let err = Client::new(&bridge, "no-separator").err().unwrap();
            assert_eq!(err.to_string(), "Invalid API key.");
        }

        #[test]
        fn version_is_embedded() {
            assert_eq!(sdk_version(), "0.2.0");
            assert_eq!(LIBRARY_STEM, "flywheelBridge");
        }
    }
}
