use serde_json::Value;

use crate::{Error, error};

pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to render response: {}", e),
    }
}

/// Prints the result of a client call or exits with a readable error.
pub fn report(result: Result<Value, Error>) {
    match result {
        Ok(value) => print_json(&value),
        Err(e) => fail(e),
    }
}

pub fn fail(e: Error) -> ! {
    match &e {
        Error::Permission(_) => error!("{}\nRe-authorize with a scope that covers this call.", e),
        e if e.requires_authorization() => error!("{}\nRe-run the authorization step.", e),
        _ => error!("{}", e),
    }
}
