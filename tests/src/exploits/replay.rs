//! # Replay Attacks
//!
//! A relayer resubmits commits the connection has already moved past.
//!
//! ## Defense
//!
//! Updates must carry a height strictly above the latest trusted height, so an
//! accepted commit can never be applied twice.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use ibc_connection::{ConnectionApi, ConnectionError, MockExecutionContext};
    use ibc_typed_store::BincodeCodec;

    #[test]
    fn test_replayed_update_rejected() {
        let chain = remote_a();
        let vals = Validators::from_seeds(&[1, 2, 3]);
        let handler = handler();
        let mut ctx = MockExecutionContext::new();
        handler.handle(&mut ctx, &open_msg(unanimous_checkpoint(&chain, 100, &vals)));

        let update = update_msg(unanimous_checkpoint(&chain, 150, &vals));
        assert!(handler.handle(&mut ctx, &update).is_ok());
        let before = ctx.store.clone();

        let replay = handler.handle(&mut ctx, &update);
        assert!(matches!(
            replay.result,
            Err(ConnectionError::InvalidHeight { height: 150, .. })
        ));
        assert!(replay.events.is_empty());
        assert_eq!(ctx.store, before);
    }

    #[test]
    fn test_root_of_trust_replayed_as_update() {
        let chain = remote_a();
        let vals = Validators::from_seeds(&[1, 2, 3]);
        let handler = handler();
        let mut ctx = MockExecutionContext::new();

        let root = unanimous_checkpoint(&chain, 100, &vals);
        handler.handle(&mut ctx, &open_msg(root.clone()));

        let response = handler.handle(&mut ctx, &update_msg(root));
        assert!(matches!(response.result, Err(ConnectionError::InvalidHeight { .. })));
        assert_eq!(status(&ctx, &chain).latest_height, 100);
    }

    #[test]
    fn test_older_commit_cannot_roll_back() {
        let chain = remote_a();
        let vals = Validators::from_seeds(&[1, 2, 3]);
        let handler = handler();
        let mut ctx = MockExecutionContext::new();
        handler.handle(&mut ctx, &open_msg(unanimous_checkpoint(&chain, 100, &vals)));
        handler.handle(&mut ctx, &update_msg(unanimous_checkpoint(&chain, 300, &vals)));

        // validly signed, but between the root and the latest height
        let response = handler.handle(&mut ctx, &update_msg(unanimous_checkpoint(&chain, 200, &vals)));
        assert!(matches!(response.result, Err(ConnectionError::InvalidHeight { .. })));
        assert_eq!(status(&ctx, &chain).latest_height, 300);
        assert_eq!(stored_checkpoint(&ctx, &chain, 200), None);
    }

    #[test]
    fn test_raw_replay_rejected() {
        let chain = remote_a();
        let vals = Validators::from_seeds(&[1, 2, 3]);
        let handler = handler();
        let mut ctx = MockExecutionContext::new();
        handler.handle(&mut ctx, &open_msg(unanimous_checkpoint(&chain, 1, &vals)));

        let raw = update_msg(unanimous_checkpoint(&chain, 2, &vals))
            .to_raw(&BincodeCodec)
            .unwrap();
        assert!(handler.handle_raw(&mut ctx, &raw).is_ok());
        assert!(handler.handle_raw(&mut ctx, &raw).result.is_err());
        assert_eq!(status(&ctx, &chain).latest_height, 2);
    }
}
