//! # Durable Connections
//!
//! The same handler over a RocksDB-backed context: accepted state survives a
//! reopen, rejected messages never reach disk.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use ibc_connection::{ConnectionApi, ConnectionError, ExecutionContext, VerificationError};
    use ibc_typed_store::{KeyValueStore, RocksDbConfig, RocksDbStore};
    use shared_types::Height;
    use tempfile::TempDir;

    struct DurableContext {
        store: RocksDbStore,
        block_height: Height,
    }

    impl DurableContext {
        fn open(dir: &TempDir) -> Self {
            let path = dir.path().join("ibc").to_string_lossy().to_string();
            Self {
                store: RocksDbStore::open(RocksDbConfig::for_testing(path)).expect("open rocksdb"),
                block_height: 1,
            }
        }
    }

    impl ExecutionContext for DurableContext {
        fn store(&self) -> &dyn KeyValueStore {
            &self.store
        }

        fn store_mut(&mut self) -> &mut dyn KeyValueStore {
            &mut self.store
        }

        fn block_height(&self) -> Height {
            self.block_height
        }
    }

    #[test]
    fn test_connection_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let chain = remote_a();
        let vals = Validators::from_seeds(&[1, 2, 3, 4]);
        let handler = handler();

        let root = unanimous_checkpoint(&chain, 100, &vals);
        let next = signed_checkpoint(&chain, 150, &vals, &vals, &[0, 1, 2]);
        {
            let mut ctx = DurableContext::open(&dir);
            assert!(handler.handle(&mut ctx, &open_msg(root.clone())).is_ok());
            ctx.block_height = 2;
            assert!(handler.handle(&mut ctx, &update_msg(next.clone())).is_ok());
        }

        let mut ctx = DurableContext::open(&dir);
        let status = status(&ctx, &chain);
        assert!(status.is_established());
        assert_eq!(status.latest_height, 150);
        assert_eq!(stored_checkpoint(&ctx, &chain, 100), Some(root));
        assert_eq!(stored_checkpoint(&ctx, &chain, 150), Some(next));

        // the reopened store still enforces monotonicity
        let response = handler.handle(&mut ctx, &update_msg(unanimous_checkpoint(&chain, 120, &vals)));
        assert!(matches!(response.result, Err(ConnectionError::InvalidHeight { .. })));
    }

    #[test]
    fn test_rejected_update_never_reaches_disk() {
        let dir = TempDir::new().unwrap();
        let chain = remote_a();
        let vals = Validators::from_seeds(&[1, 2, 3]);
        let rogue = Validators::from_seeds(&[7, 8, 9]);
        let handler = handler();

        {
            let mut ctx = DurableContext::open(&dir);
            handler.handle(&mut ctx, &open_msg(unanimous_checkpoint(&chain, 10, &vals)));
            let response = handler.handle(&mut ctx, &update_msg(unanimous_checkpoint(&chain, 20, &rogue)));
            assert!(matches!(
                response.result,
                Err(ConnectionError::Verification(VerificationError::QuorumNotMet { .. }))
            ));
        }

        let ctx = DurableContext::open(&dir);
        assert_eq!(status(&ctx, &chain).latest_height, 10);
        assert_eq!(stored_checkpoint(&ctx, &chain, 20), None);
    }
}
