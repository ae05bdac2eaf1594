use super::*;
use crate::kernel::services::ports::{ready_pair, DocumentModel};
use crate::test_support::{decode, fixture, fixture_with_ready, payload, PIXELS};

#[tokio::test]
async fn load_decodes_payload_into_surface() {
    let mut fx = fixture("images/cat.png", &payload());

    let outcome = fx.session.load().await.unwrap();

    assert_eq!(outcome, LoadOutcome::Loaded);
    let log = fx.surface.borrow();
    assert_eq!(log.image, PIXELS);
    assert_eq!(log.mime_type, "image/png");
    assert_eq!(log.loads.len(), 1);
    assert_eq!(log.loads[0].1, "images/cat.png");
    assert_eq!(fx.session.binding().load_count(), 1);
}

#[tokio::test]
async fn load_revokes_transient_url() {
    let mut fx = fixture("cat.png", &payload());
    fx.session.load().await.unwrap();

    let url = fx.surface.borrow().loads[0].0.clone();
    assert!(url.starts_with("blob:"));
    assert_eq!(fx.blobs.live_urls(), 0);
}

#[tokio::test]
async fn empty_document_never_reaches_surface() {
    let mut fx = fixture("empty.png", "");

    let outcome = fx.session.load().await.unwrap();

    assert_eq!(outcome, LoadOutcome::SkippedEmpty);
    let log = fx.surface.borrow();
    assert!(log.loads.is_empty());
    assert!(log.image.is_empty());
}

#[tokio::test]
async fn identical_content_is_not_reloaded() {
    let mut fx = fixture("cat.png", &payload());
    assert_eq!(fx.session.load().await.unwrap(), LoadOutcome::Loaded);
    assert_eq!(
        fx.session.load().await.unwrap(),
        LoadOutcome::SkippedUnchanged
    );
    assert_eq!(fx.surface.borrow().loads.len(), 1);
}

#[tokio::test]
async fn line_wrapped_payload_loads() {
    let encoded = payload();
    let (head, tail) = encoded.split_at(8);
    let mut fx = fixture("cat.png", &format!("{head}\n{tail}\n"));

    assert_eq!(fx.session.load().await.unwrap(), LoadOutcome::Loaded);
    assert_eq!(fx.surface.borrow().image, PIXELS);
}

#[tokio::test]
async fn undecodable_payload_leaves_surface_blank() {
    let mut fx = fixture("broken.png", "@@not-base64@@");

    let err = fx.session.load().await.unwrap_err();

    assert!(matches!(err, BindingError::Decode(_)));
    assert!(fx.surface.borrow().loads.is_empty());
    assert!(fx.surface.borrow().image.is_empty());
}

#[tokio::test]
async fn load_waits_for_both_signals() {
    let (doc_resolver, doc_ready) = ready_pair();
    let (surface_resolver, surface_ready) = ready_pair();
    let mut fx = fixture_with_ready("cat.png", &payload(), doc_ready, surface_ready);
    let log = fx.surface.clone();

    let resolve = async {
        tokio::task::yield_now().await;
        surface_resolver.resolve();
        tokio::task::yield_now().await;
        assert!(log.borrow().loads.is_empty());
        doc_resolver.resolve();
    };
    let (outcome, ()) = tokio::join!(fx.session.load(), resolve);

    assert_eq!(outcome.unwrap(), LoadOutcome::Loaded);
    assert_eq!(fx.surface.borrow().loads.len(), 1);
}

#[tokio::test]
async fn abandoned_surface_signal_fails_load() {
    let (surface_resolver, surface_ready) = ready_pair();
    drop(surface_resolver);
    let mut fx = fixture_with_ready("cat.png", &payload(), ReadySignal::resolved(), surface_ready);

    assert!(matches!(
        fx.session.load().await,
        Err(BindingError::NotReady("surface"))
    ));
}

#[tokio::test]
async fn load_then_sync_round_trips_content() {
    let content = payload();
    let mut fx = fixture("cat.png", &content);
    fx.session.load().await.unwrap();

    fx.session.update_model().await.unwrap();

    assert_eq!(fx.session.document().model().content(), content);
    assert_eq!(fx.session.binding().sync_count(), 1);
    assert_eq!(fx.frames.frames_requested(), 1);
}

#[tokio::test]
async fn sync_writes_bare_payload_after_edit() {
    let mut fx = fixture("cat.png", &payload());
    fx.session.load().await.unwrap();
    fx.session.surface_mut().rotate(30);

    fx.session.update_model().await.unwrap();

    let content = fx.session.document().model().content();
    assert!(!content.starts_with("data:"));
    assert_ne!(content, payload());
    assert!(decode(&content).ends_with(b"|rotate:30"));
    assert_eq!(fx.session.binding().last_synced(), Some(content.as_str()));
}

#[test]
fn strip_data_url_requires_base64_marker() {
    assert_eq!(strip_data_url("data:image/png;base64,AQID"), Some("AQID"));
    assert_eq!(strip_data_url("data:image/png;base64,"), Some(""));
    assert_eq!(strip_data_url("data:text/plain,hello"), None);
    assert_eq!(strip_data_url("AQID"), None);
}
