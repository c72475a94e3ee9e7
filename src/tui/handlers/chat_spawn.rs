//! Spawns chat requests in a background thread with a result channel.

use std::sync::Arc;
use std::sync::mpsc;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::core::llm;
use crate::core::message::Message;

use super::PendingChat;

/// Spawn a new chat request. Returns PendingChat with the result channel and cancel token.
pub fn spawn_chat(
    rt: &Arc<Runtime>,
    config: Arc<Config>,
    prompt: String,
    history: Vec<Message>,
) -> PendingChat {
    let (result_tx, result_rx) = mpsc::channel();
    let cancel_token = CancellationToken::new();
    let cancel_token_clone = cancel_token.clone();
    let rt_clone = Arc::clone(rt);
    let prompt_clone = prompt.clone();

    std::thread::spawn(move || {
        let result = rt_clone.block_on(llm::chat(llm::ChatRequest {
            config: config.as_ref(),
            prompt: &prompt_clone,
            history: &history,
            cancel_token: Some(cancel_token_clone),
        }));
        let _ = result_tx.send(result);
    });

    PendingChat {
        prompt,
        result_rx,
        cancel_token,
    }
}
