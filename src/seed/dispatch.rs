use log::{debug, info};
use serde_json::Value;
use std::path::Path;

use crate::error::LoadError;
use crate::model::{LoadInstruction, Verb};
use crate::seed::key::key_path;
use crate::seed::source::read_tokens;
use crate::transport::{RestClient, RestRequest};

/// Replay one load instruction against the API.
///
/// Returns the number of requests sent. Disabled instructions send nothing.
/// The first failed request ends the instruction; requests already sent are
/// not undone.
pub async fn dispatch<C>(client: &C, instruction: &LoadInstruction) -> Result<usize, LoadError>
where
    C: RestClient + ?Sized,
{
    if instruction.disabled {
        debug!("Skipping disabled instruction for {}", instruction.api);
        return Ok(0);
    }

    let sent = match instruction.verb {
        Verb::Delete => handle_delete(client, &instruction.api).await?,
        Verb::Post => handle_post(client, &instruction.api, &instruction.path).await?,
        Verb::Put => {
            handle_put(client, &instruction.api, &instruction.path, &instruction.key).await?
        }
        Verb::Get => return Err(LoadError::UnsupportedVerb(Verb::Get)),
    };

    info!("{} {}: {} request(s)", instruction.verb, instruction.api, sent);
    Ok(sent)
}

/// Delete everything addressed by the API path. The source file and key are not used.
async fn handle_delete<C>(client: &C, api: &str) -> Result<usize, LoadError>
where
    C: RestClient + ?Sized,
{
    send_checked(client, RestRequest::delete(api)).await?;
    Ok(1)
}

/// Post every object or array in the source file, one request each.
async fn handle_post<C>(client: &C, api: &str, path: &Path) -> Result<usize, LoadError>
where
    C: RestClient + ?Sized,
{
    let mut sent = 0;
    for token in read_tokens(path).await? {
        match token {
            Value::Object(_) | Value::Array(_) => {
                send_checked(client, RestRequest::post(api, token.to_string())).await?;
                sent += 1;
            }
            scalar => debug!("Skipping scalar token {} in {}", scalar, path.display()),
        }
    }
    Ok(sent)
}

/// Put every object in the source file at the URL formed from its key fields.
async fn handle_put<C>(client: &C, api: &str, path: &Path, key_spec: &str) -> Result<usize, LoadError>
where
    C: RestClient + ?Sized,
{
    let mut sent = 0;
    for token in read_tokens(path).await? {
        let Value::Object(record) = &token else {
            continue;
        };

        let resource = format!("{}/{}", api, key_path(record, key_spec));
        send_checked(client, RestRequest::put(resource, token.to_string())).await?;
        sent += 1;
    }
    Ok(sent)
}

async fn send_checked<C>(client: &C, request: RestRequest) -> Result<(), LoadError>
where
    C: RestClient + ?Sized,
{
    let response = client.send(request).await?;
    if response.is_success() {
        Ok(())
    } else {
        Err(LoadError::Http {
            status: response.status,
            reason: response.reason,
        })
    }
}
