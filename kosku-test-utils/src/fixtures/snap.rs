use mockito::Matcher;

use crate::TestSetup;

/// Token returned by [`TestSetup::with_snap_transaction_endpoint`].
pub static TEST_SNAP_TOKEN: &str = "66e4fa55-fdac-4ef9-91b5-733b97d1b862";

impl TestSetup {
    /// Mock a successful Snap transaction creation for `order_id` (any order when `None`).
    pub fn with_snap_transaction_endpoint(
        &mut self,
        order_id: Option<&str>,
        expected_requests: usize,
    ) -> &mut Self {
        let body_matcher = match order_id {
            Some(order_id) => Matcher::PartialJsonString(format!(
                r#"{{"transaction_details":{{"order_id":"{}"}}}}"#,
                order_id
            )),
            None => Matcher::Any,
        };

        let redirect_url = format!(
            "{}/snap/v2/vtweb/{}",
            self.server.url(),
            TEST_SNAP_TOKEN
        );

        let mock = self
            .server
            .mock("POST", "/snap/v1/transactions")
            .match_body(body_matcher)
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "token": TEST_SNAP_TOKEN,
                    "redirect_url": redirect_url,
                })
                .to_string(),
            )
            .expect(expected_requests)
            .create();

        self.mocks.push(mock);
        self
    }

    /// Mock Snap rejecting transaction creation.
    pub fn with_snap_error_endpoint(&mut self, expected_requests: usize) -> &mut Self {
        let mock = self
            .server
            .mock("POST", "/snap/v1/transactions")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error_messages":["Access denied due to unauthorized transaction"]}"#)
            .expect(expected_requests)
            .create();

        self.mocks.push(mock);
        self
    }
}
