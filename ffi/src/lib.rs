use engine::api::{simulate_match, simulate_match_many, MatchConfig};
use jni::objects::{JClass, JString};
use jni::sys::jstring;
use jni::JNIEnv;
use serde_json::json;

const DEFAULT_SAMPLES: u32 = 100;

fn ok(env: &JNIEnv, value: serde_json::Value) -> jstring {
    let payload = json!({ "ok": true, "result": value });
    new_jstring(env, payload.to_string())
}

fn err(env: &JNIEnv, e: impl std::fmt::Display) -> jstring {
    new_jstring(env, error_payload(e))
}

fn new_jstring(env: &JNIEnv, s: String) -> jstring {
    match env.new_string(s) {
        Ok(js) => js.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

fn error_payload(e: impl std::fmt::Display) -> String {
    json!({ "ok": false, "error": e.to_string() }).to_string()
}

#[no_mangle]
pub extern "system" fn Java_com_cardbattle_Ffi_version<'local>(
    env: JNIEnv<'local>,
    _class: JClass<'local>,
) -> jstring {
    new_jstring(&env, format!("cardbattle-ffi {}", env!("CARGO_PKG_VERSION")))
}

#[no_mangle]
pub extern "system" fn Java_com_cardbattle_Ffi_simulateMatchJson(
    mut env: JNIEnv,
    _class: JClass,
    json: JString,
) -> jstring {
    let input: String = match env.get_string(&json) {
        Ok(s) => s.into(),
        Err(e) => return err(&env, e),
    };
    match simulate_match_json(&input) {
        Ok(value) => ok(&env, value),
        Err(e) => err(&env, e),
    }
}

#[no_mangle]
pub extern "system" fn Java_com_cardbattle_Ffi_simulateMatchManyJson(
    mut env: JNIEnv,
    _class: JClass,
    json: JString,
) -> jstring {
    let input: String = match env.get_string(&json) {
        Ok(s) => s.into(),
        Err(e) => return err(&env, e),
    };
    match simulate_match_many_json(&input) {
        Ok(value) => ok(&env, value),
        Err(e) => err(&env, e),
    }
}

// Internal functions for testing without JNI overhead

pub fn simulate_match_json(input: &str) -> Result<serde_json::Value, String> {
    let cfg: MatchConfig =
        serde_json::from_str(input).map_err(|e| format!("invalid_config: {}", e))?;
    let report = simulate_match(cfg).map_err(|e| format!("{:#}", e))?;
    serde_json::to_value(report).map_err(|e| e.to_string())
}

/// Same as [`simulate_match_json`] with an extra top-level `samples` field.
pub fn simulate_match_many_json(input: &str) -> Result<serde_json::Value, String> {
    let mut root: serde_json::Value =
        serde_json::from_str(input).map_err(|e| format!("invalid_config: {}", e))?;
    let samples = match root.get("samples") {
        None => DEFAULT_SAMPLES,
        Some(v) => v
            .as_u64()
            .filter(|&n| n > 0)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| "invalid_config: samples must be a positive integer".to_string())?,
    };
    if let Some(obj) = root.as_object_mut() {
        obj.remove("samples");
    }
    let cfg: MatchConfig =
        serde_json::from_value(root).map_err(|e| format!("invalid_config: {}", e))?;
    let stats = simulate_match_many(cfg, samples).map_err(|e| format!("{:#}", e))?;
    serde_json::to_value(stats).map_err(|e| e.to_string())
}
