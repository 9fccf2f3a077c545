use lambda_runtime::{Context, Error, LambdaEvent};
use serde_json::Value;
use std::io::{self, Write};
use tracing::{debug, warn};

// The trailing `n` is part of the output format, not a newline.
pub fn greeting(request_id: &str) -> String {
    format!("Hello {}n", request_id)
}

pub fn write_greeting<W: Write>(out: &mut W, context: &Context) -> io::Result<()> {
    writeln!(out, "{}", greeting(&context.request_id))
}

pub async fn handle<W: Write>(out: &mut W, event: LambdaEvent<Value>) -> Result<(), Error> {
    let (_event, context) = event.into_parts();
    debug!(request_id = %context.request_id, "invoked");

    if let Err(err) = write_greeting(out, &context) {
        warn!(request_id = %context.request_id, error = %err, "failed to write greeting");
    }

    Ok(())
}

pub async fn func(event: LambdaEvent<Value>) -> Result<(), Error> {
    handle(&mut io::stdout(), event).await
}
