//! Profile data feed: payload decoding and the serialized update loop.
//!
//! A producer pushes raw JSON payloads into a channel whenever the backend
//! has new data. [`observe`] drains the channel one payload at a time, so
//! "decode, diff, apply, retain" never overlaps for the same view model.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::error::ProfileResult;
use crate::model::Profile;
use crate::view_model::{ProfileUpdate, ProfileViewModel};

/// Default capacity of the payload channel.
pub const DEFAULT_FEED_CAPACITY: usize = 64;

/// Decode a JSON profile payload.
pub fn decode_profile(payload: &[u8]) -> ProfileResult<Profile> {
    Ok(serde_json::from_slice(payload)?)
}

/// Create a bounded payload channel for [`observe`].
pub fn feed_channel(capacity: usize) -> (mpsc::Sender<Vec<u8>>, mpsc::Receiver<Vec<u8>>) {
    mpsc::channel(capacity.max(1))
}

/// Run the update loop until every sender is dropped.
///
/// Undecodable payloads are logged and skipped. Each decoded profile is fed
/// to `view_model` and the resulting update handed to `sink`; an error from
/// the sink stops the loop. Returns the number of updates delivered.
pub async fn observe<F>(
    mut payloads: mpsc::Receiver<Vec<u8>>,
    view_model: &mut ProfileViewModel,
    mut sink: F,
) -> ProfileResult<usize>
where
    F: FnMut(&ProfileUpdate) -> ProfileResult<()>,
{
    info!("observing profile feed");
    let mut delivered = 0;

    while let Some(payload) = payloads.recv().await {
        let profile = match decode_profile(&payload) {
            Ok(profile) => profile,
            Err(e) => {
                warn!(bytes = payload.len(), error = %e, "skipping undecodable profile payload");
                continue;
            }
        };

        let update = view_model.update(&profile);
        sink(&update)?;
        delivered += 1;
        debug!(delivered, "profile update delivered");
    }

    info!(delivered, "profile feed closed");
    Ok(delivered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileError;
    use sdiff_engine::{ApplyError, RenderedList};
    use sdiff_types::ChangeSet;

    #[test]
    fn decode_valid_payload() {
        let profile = decode_profile(br#"{"id":"1","name":"Al"}"#).unwrap();
        assert_eq!(profile.name.as_deref(), Some("Al"));
    }

    #[test]
    fn decode_invalid_payload() {
        let err = decode_profile(b"not json").unwrap_err();
        assert!(matches!(err, ProfileError::Decode(_)));
    }

    #[tokio::test]
    async fn observe_delivers_updates_in_order() {
        let (tx, rx) = feed_channel(DEFAULT_FEED_CAPACITY);
        tx.send(br#"{"id":"1","name":"Al","email":"a@x.com"}"#.to_vec()).await.unwrap();
        tx.send(br#"{"id":"1","name":"Al","email":"al@x.com"}"#.to_vec()).await.unwrap();
        drop(tx);

        let mut vm = ProfileViewModel::new();
        let mut seen: Vec<ChangeSet> = Vec::new();
        let delivered = observe(rx, &mut vm, |update| {
            seen.push(update.changes.clone());
            Ok(())
        })
        .await
        .unwrap();

        assert_eq!(delivered, 2);
        assert_eq!(seen[0].section_inserts().len(), 1);
        assert_eq!(seen[1].row_reloads().len(), 1);
        assert_eq!(vm.items().len(), 1);
    }

    #[tokio::test]
    async fn observe_skips_bad_payloads() {
        let (tx, rx) = feed_channel(4);
        tx.send(b"{broken".to_vec()).await.unwrap();
        tx.send(br#"{"about":{"title":"About","content":"Hi"}}"#.to_vec()).await.unwrap();
        drop(tx);

        let mut vm = ProfileViewModel::new();
        let delivered = observe(rx, &mut vm, |_| Ok(())).await.unwrap();
        assert_eq!(delivered, 1);
        assert_eq!(vm.items().len(), 1);
    }

    #[tokio::test]
    async fn observe_stops_on_sink_error() {
        let (tx, rx) = feed_channel(4);
        tx.send(br#"{"id":"1","name":"Al"}"#.to_vec()).await.unwrap();
        tx.send(br#"{"id":"1","name":"Bo"}"#.to_vec()).await.unwrap();
        drop(tx);

        let mut vm = ProfileViewModel::new();
        let result = observe(rx, &mut vm, |_| {
            Err(ApplyError::InconsistentSectionCount { expected: 1, actual: 0 }.into())
        })
        .await;
        assert!(matches!(result, Err(ProfileError::Apply(_))));
    }

    #[tokio::test]
    async fn observe_drives_rendered_list() {
        let (tx, rx) = feed_channel(8);
        let payloads = [
            r#"{"id":"1","name":"Al","details":[{"key":"age","value":"30"}]}"#,
            r#"{"id":"1","name":"Al","friends":[{"id":"9","name":"Bo","email":"b@x.com","imageUrl":"u"}]}"#,
            r#"{}"#,
        ];
        for p in payloads {
            tx.send(p.as_bytes().to_vec()).await.unwrap();
        }
        drop(tx);

        let mut vm = ProfileViewModel::new();
        let mut list = RenderedList::from_snapshot(&vm.snapshot());
        let delivered = observe(rx, &mut vm, |update| {
            list.apply(&update.changes, &update.snapshot)?;
            Ok(())
        })
        .await
        .unwrap();

        assert_eq!(delivered, 3);
        assert!(list.sections().is_empty());
    }

    #[tokio::test]
    async fn empty_feed_delivers_nothing() {
        let (tx, rx) = feed_channel(0);
        drop(tx);
        let mut vm = ProfileViewModel::new();
        assert_eq!(observe(rx, &mut vm, |_| Ok(())).await.unwrap(), 0);
    }
}
