//! # State Machine Properties
//!
//! Random message sequences against the handler, checked against a
//! one-line model: the latest height only ever grows, and once established
//! a connection stays established.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use ibc_connection::{ConnectionApi, ConnectionError, ConnectionState, MockExecutionContext};
    use proptest::prelude::*;

    #[derive(Clone, Copy, Debug)]
    enum Step {
        Open(u64),
        Update(u64),
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            1 => (1u64..500).prop_map(Step::Open),
            4 => (1u64..500).prop_map(Step::Update),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_latest_height_is_monotonic(steps in prop::collection::vec(step(), 1..10)) {
            let chain = remote_a();
            let vals = Validators::from_seeds(&[1, 2, 3]);
            let handler = handler();
            let mut ctx = MockExecutionContext::new();

            let mut model: Option<u64> = None;
            for step in steps {
                let before = ctx.store.clone();
                let response = match step {
                    Step::Open(h) => handler.handle(&mut ctx, &open_msg(unanimous_checkpoint(&chain, h, &vals))),
                    Step::Update(h) => handler.handle(&mut ctx, &update_msg(unanimous_checkpoint(&chain, h, &vals))),
                };

                let expected_ok = match (step, model) {
                    (Step::Open(h), None) => { model = Some(h); true }
                    (Step::Update(h), Some(latest)) if h > latest => { model = Some(h); true }
                    _ => false,
                };
                prop_assert_eq!(response.is_ok(), expected_ok);
                if !expected_ok {
                    prop_assert_eq!(&ctx.store, &before);
                }

                let status = status(&ctx, &chain);
                prop_assert_eq!(status.latest_height, model.unwrap_or(0));
                prop_assert_eq!(status.is_established(), model.is_some());
            }
        }

        #[test]
        fn prop_established_is_one_way(reopen in 1u64..1_000, stale in 1u64..=100) {
            let chain = remote_a();
            let vals = Validators::from_seeds(&[1, 2, 3]);
            let handler = handler();
            let mut ctx = MockExecutionContext::new();
            handler.handle(&mut ctx, &open_msg(unanimous_checkpoint(&chain, 100, &vals)));

            let reopened = handler.handle(&mut ctx, &open_msg(unanimous_checkpoint(&chain, reopen, &vals)));
            let is_already_established = matches!(
                reopened.result,
                Err(ConnectionError::ConnectionAlreadyEstablished { .. })
            );
            prop_assert!(is_already_established);

            let staled = handler.handle(&mut ctx, &update_msg(unanimous_checkpoint(&chain, stale, &vals)));
            let is_invalid_height = matches!(staled.result, Err(ConnectionError::InvalidHeight { .. }));
            prop_assert!(is_invalid_height);

            let status = status(&ctx, &chain);
            prop_assert_eq!(status.state, ConnectionState::Established);
            prop_assert_eq!(status.latest_height, 100);
        }
    }
}
