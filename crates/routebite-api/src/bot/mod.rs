//! Telegram long-poll loop.
//!
//! Fetches updates, classifies each into a dispatcher [`Inbound`], and sends
//! the reply back to the originating chat. Each update is handled end-to-end
//! before the next one; a failure on one update is logged and never stops
//! the loop. There is no retry for a failed send -- the next message from
//! the user simply starts a fresh turn.

use std::time::Duration;

use tracing::{error, info, warn};

use routebite_core::dispatch::{Inbound, MessageDispatcher};
use routebite_core::intent::IntentExtractor;
use routebite_infra::telegram::{TelegramClient, Update};

/// Back-off after a failed getUpdates call before polling again.
const POLL_RETRY_DELAY: Duration = Duration::from_secs(5);

/// One classified inbound event: where to reply, what was said, and the
/// callback query to acknowledge, if any.
struct ClassifiedUpdate {
    chat_id: i64,
    inbound: Inbound,
    callback_id: Option<String>,
}

/// Run the poll loop until the task is cancelled.
pub async fn run<I: IntentExtractor>(client: TelegramClient, dispatcher: MessageDispatcher<I>) {
    info!("telegram poller started");
    let mut offset: Option<i64> = None;

    loop {
        let updates = match client.get_updates(offset).await {
            Ok(updates) => updates,
            Err(err) => {
                warn!(error = %err, "getUpdates failed, backing off");
                tokio::time::sleep(POLL_RETRY_DELAY).await;
                continue;
            }
        };

        for update in updates {
            offset = Some(update.update_id + 1);
            handle_update(&client, &dispatcher, update).await;
        }
    }
}

/// Handle a single update end-to-end. Errors are logged, not propagated.
async fn handle_update<I: IntentExtractor>(
    client: &TelegramClient,
    dispatcher: &MessageDispatcher<I>,
    update: Update,
) {
    let update_id = update.update_id;
    let Some(classified) = classify(update) else {
        // Stickers, photos, edits: nothing for the dispatcher to do.
        return;
    };

    if let Some(callback_id) = &classified.callback_id {
        if let Err(err) = client.answer_callback_query(callback_id).await {
            warn!(update_id, error = %err, "failed to answer callback query");
        }
    }

    let reply = dispatcher.handle(classified.inbound).await;

    if let Err(err) = client.send_reply(classified.chat_id, &reply).await {
        error!(update_id, chat_id = classified.chat_id, error = %err, "failed to send reply");
    }
}

/// Map a raw update onto the dispatcher's inbound taxonomy.
///
/// - A callback query becomes [`Inbound::Callback`]; it needs both a data
///   payload and the original message (for the chat id).
/// - A text message starting with `/` becomes [`Inbound::Command`].
/// - Any other text becomes [`Inbound::Text`].
/// - Everything else is dropped.
fn classify(update: Update) -> Option<ClassifiedUpdate> {
    if let Some(query) = update.callback_query {
        let chat_id = query.message?.chat.id;
        let payload = query.data?;
        return Some(ClassifiedUpdate {
            chat_id,
            inbound: Inbound::Callback(payload),
            callback_id: Some(query.id),
        });
    }

    let message = update.message?;
    let text = message.text?;
    let inbound = if text.starts_with('/') {
        Inbound::Command(text)
    } else {
        Inbound::Text(text)
    };

    Some(ClassifiedUpdate {
        chat_id: message.chat.id,
        inbound,
        callback_id: None,
    })
}
