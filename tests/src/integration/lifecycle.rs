//! # Connection Lifecycle
//!
//! End-to-end flows through the handler, registry, verifier and typed store:
//!
//! 1. Open `remote-A` from a root of trust at height 100
//! 2. Resubmitting height 100 fails with `InvalidHeight`
//! 3. A quorum-signed commit at 150 advances the connection
//! 4. A commit at 200 from an unrelated validator set fails with `QuorumNotMet`

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use ibc_connection::{
        ConnectionApi, ConnectionConfig, ConnectionError, ConnectionEvent, ConnectionState,
        MockExecutionContext, TrustThreshold, VerificationError,
    };

    #[test]
    fn test_documented_scenario() {
        ibc_telemetry::init_test_tracing();
        let chain = remote_a();
        let vals = Validators::from_seeds(&[1, 2, 3, 4]);
        let handler = handler();
        let mut ctx = MockExecutionContext::new();

        // Open at 100 on empty state
        let response = handler.handle(&mut ctx, &open_msg(unanimous_checkpoint(&chain, 100, &vals)));
        assert!(response.is_ok(), "{:?}", response.result);
        let opened = status(&ctx, &chain);
        assert_eq!(opened.state, ConnectionState::Established);
        assert_eq!(opened.latest_height, 100);

        // Update at 100: not strictly greater
        let before = ctx.store.clone();
        let response = handler.handle(&mut ctx, &update_msg(unanimous_checkpoint(&chain, 100, &vals)));
        assert!(matches!(
            response.result,
            Err(ConnectionError::InvalidHeight { height: 100, .. })
        ));
        assert_eq!(ctx.store, before);

        // Update at 150 with a 3-of-4 quorum
        let root = stored_checkpoint(&ctx, &chain, 100);
        let candidate = signed_checkpoint(&chain, 150, &vals, &vals, &[0, 1, 2]);
        let response = handler.handle(&mut ctx, &update_msg(candidate.clone()));
        assert!(response.is_ok(), "{:?}", response.result);
        assert_eq!(status(&ctx, &chain).latest_height, 150);
        assert_eq!(stored_checkpoint(&ctx, &chain, 100), root);
        assert_eq!(stored_checkpoint(&ctx, &chain, 150), Some(candidate));

        // Update at 200 from an unrelated set
        let rogue = Validators::from_seeds(&[101, 102, 103, 104]);
        let before = ctx.store.clone();
        let response = handler.handle(&mut ctx, &update_msg(unanimous_checkpoint(&chain, 200, &rogue)));
        assert!(matches!(
            response.result,
            Err(ConnectionError::Verification(VerificationError::QuorumNotMet { .. }))
        ));
        assert_eq!(status(&ctx, &chain).latest_height, 150);
        assert_eq!(ctx.store, before);
    }

    #[test]
    fn test_events_describe_transitions() {
        let chain = remote_a();
        let vals = Validators::from_seeds(&[1, 2, 3]);
        let handler = handler();
        let mut ctx = MockExecutionContext::new();

        let opened = handler.handle(&mut ctx, &open_msg(unanimous_checkpoint(&chain, 10, &vals)));
        assert_eq!(
            opened.events,
            vec![ConnectionEvent::ConnectionOpened {
                chain_id: chain.clone(),
                height: 10,
                signer: relayer(),
            }]
        );

        let updated = handler.handle(&mut ctx, &update_msg(unanimous_checkpoint(&chain, 25, &vals)));
        let attrs = updated.events[0].attributes();
        assert!(attrs.contains(&("action", "update_conn".to_string())));
        assert!(attrs.contains(&("previous_height", "10".to_string())));
        assert!(attrs.contains(&("height", "25".to_string())));
        assert_eq!(updated.code(), 0);
    }

    #[test]
    fn test_second_open_keeps_first_root() {
        let chain = remote_a();
        let vals = Validators::from_seeds(&[1, 2, 3]);
        let handler = handler();
        let mut ctx = MockExecutionContext::new();

        let first = unanimous_checkpoint(&chain, 100, &vals);
        assert!(handler.handle(&mut ctx, &open_msg(first.clone())).is_ok());

        let response = handler.handle(&mut ctx, &open_msg(unanimous_checkpoint(&chain, 500, &vals)));
        assert!(matches!(
            response.result,
            Err(ConnectionError::ConnectionAlreadyEstablished { .. })
        ));
        assert_eq!(status(&ctx, &chain).latest_height, 100);
        assert_eq!(stored_checkpoint(&ctx, &chain, 100), Some(first));
        assert_eq!(stored_checkpoint(&ctx, &chain, 500), None);
    }

    #[test]
    fn test_announced_rotation() {
        let chain = remote_a();
        let old = Validators::from_seeds(&[1, 2, 3]);
        let new = Validators::from_seeds(&[21, 22, 23]);
        let handler = handler();
        let mut ctx = MockExecutionContext::new();

        handler.handle(&mut ctx, &open_msg(unanimous_checkpoint(&chain, 100, &old)));

        // block 150 is signed by the old set and announces the new one
        let handover = signed_checkpoint(&chain, 150, &old, &new, &old.all());
        assert!(handler.handle(&mut ctx, &update_msg(handover)).is_ok());

        // from here on the new set signs alone
        let next = unanimous_checkpoint(&chain, 151, &new);
        assert!(handler.handle(&mut ctx, &update_msg(next)).is_ok());
        assert_eq!(status(&ctx, &chain).latest_height, 151);
    }

    #[test]
    fn test_skipping_transition_depends_on_trust_threshold() {
        let chain = remote_a();
        let old = Validators::from_seeds(&[1, 2, 3, 4, 5, 6]);
        // half of the trusted set carries over
        let new = Validators::from_seeds(&[1, 2, 3, 31, 32, 33]);

        let strict = handler();
        let mut ctx = MockExecutionContext::new();
        strict.handle(&mut ctx, &open_msg(unanimous_checkpoint(&chain, 100, &old)));
        let response = strict.handle(&mut ctx, &update_msg(unanimous_checkpoint(&chain, 300, &new)));
        assert!(matches!(
            response.result,
            Err(ConnectionError::Verification(VerificationError::QuorumNotMet { signed: 30, total: 60, .. }))
        ));

        let lenient = handler_with(ConnectionConfig {
            trust_threshold: TrustThreshold::ONE_THIRD,
            ..ConnectionConfig::for_testing()
        });
        let mut ctx = MockExecutionContext::new();
        lenient.handle(&mut ctx, &open_msg(unanimous_checkpoint(&chain, 100, &old)));
        let response = lenient.handle(&mut ctx, &update_msg(unanimous_checkpoint(&chain, 300, &new)));
        assert!(response.is_ok(), "{:?}", response.result);
    }

    #[test]
    fn test_weighted_quorum() {
        let chain = remote_a();
        // one heavy validator holds 70% of the power
        let vals = Validators::with_powers(&[1, 2, 3, 4], &[70, 10, 10, 10]);
        let handler = handler();
        let mut ctx = MockExecutionContext::new();
        handler.handle(&mut ctx, &open_msg(unanimous_checkpoint(&chain, 1, &vals)));

        // 3 of 4 validators but only 30% of power
        let light = signed_checkpoint(&chain, 2, &vals, &vals, &[1, 2, 3]);
        assert!(handler.handle(&mut ctx, &update_msg(light)).result.is_err());

        // 2 of 4 validators carrying 80%
        let heavy = signed_checkpoint(&chain, 2, &vals, &vals, &[0, 1]);
        assert!(handler.handle(&mut ctx, &update_msg(heavy)).is_ok());
    }
}
