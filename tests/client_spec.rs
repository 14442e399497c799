use recigo::client::{ClientError, RecigoClient, RequestSequence};

mod request_sequence {
    use super::*;

    #[test]
    fn tokens_are_monotonically_increasing() {
        let sequence = RequestSequence::new();
        let first = sequence.begin();
        let second = sequence.begin();
        assert!(second > first);
    }

    #[test]
    fn only_the_latest_token_is_current() {
        let sequence = RequestSequence::new();
        let stale = sequence.begin();
        let latest = sequence.begin();

        assert!(!sequence.is_current(stale));
        assert!(sequence.is_current(latest));
    }

    #[test]
    fn a_new_request_supersedes_the_previous_one() {
        let sequence = RequestSequence::new();
        let first = sequence.begin();
        assert!(sequence.is_current(first));

        let second = sequence.begin();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }

    #[test]
    fn discards_a_slow_superseded_result() {
        // Simulates the race: request A starts, request B starts, B's
        // result lands, then A's late result arrives and must be dropped.
        let sequence = RequestSequence::new();
        let mut visible: Option<&str> = None;

        let token_a = sequence.begin();
        let token_b = sequence.begin();

        if sequence.is_current(token_b) {
            visible = Some("result B");
        }
        if sequence.is_current(token_a) {
            visible = Some("result A");
        }

        assert_eq!(visible, Some("result B"));
    }
}

mod transport_errors {
    use super::*;

    #[tokio::test]
    async fn unreachable_backend_reports_a_transport_error() {
        // Nothing listens on this port; the connection is refused.
        let client = RecigoClient::new("http://127.0.0.1:9");

        let result = client.generate_search_results("pad thai").await;
        assert!(matches!(result, Err(ClientError::Transport(_))));
    }
}
