//! Decode a workspace export and print a summary
//!
//! Shows the difference between the default all-or-nothing array handling and
//! `ArrayPolicy::SkipInvalid` on an export with one malformed intent.
//!
//! Usage:
//!   RUST_LOG=watson_models=debug cargo run --example decode_export

use serde_json::json;
use watson_models::codec::{ArrayPolicy, DecodeOptions, JsonModel};
use watson_models::conversation::{CreateWorkspace, WorkspaceExport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let response = json!({
        "name": "Car Dashboard",
        "description": "Cognitive car workspace",
        "language": "en",
        "metadata": {"runtime_version": "2017-05-26"},
        "created": "2017-05-01T10:00:00.000Z",
        "updated": "2017-05-02T10:00:00.000Z",
        "workspace_id": "9978a49e-ea89-4493-b33d-82298d3db20d",
        "status": "Available",
        "learning_opt_out": false,
        "intents": [
            {
                "intent": "turn_on",
                "created": "2017-05-01T10:00:00.000Z",
                "updated": "2017-05-01T10:00:00.000Z",
                "examples": [
                    {
                        "text": "turn on the radio",
                        "created": "2017-05-01T10:00:00.000Z",
                        "updated": "2017-05-01T10:00:00.000Z"
                    }
                ]
            },
            {"intent": "turn_off"}
        ]
    });

    for policy in [ArrayPolicy::AllOrNothing, ArrayPolicy::SkipInvalid] {
        let options = DecodeOptions::new().with_array_policy(policy);
        let export = WorkspaceExport::from_json_with(&response, &options)?;
        let intents = export.intents.as_ref().map(Vec::len);
        println!(
            "{:?}: workspace '{}' ({}), intents: {:?}",
            policy, export.name, export.status, intents
        );
    }

    // An update body that only renames the workspace.
    let update = CreateWorkspace::new().with_name("Car Dashboard v2");
    println!("update body: {}", watson_models::codec::to_string(&update)?);

    Ok(())
}
