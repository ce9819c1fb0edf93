use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use chrono::Utc;
use kosku::{
    model::payment::{ConfirmPaymentDto, CreatePaymentDto, NotificationDto},
    server::controller::{
        payment::{confirm_payment, create_payment, list_transactions},
        webhook::midtrans_notification,
    },
};
use kosku_test_utils::{fixtures::snap::TEST_SNAP_TOKEN, prelude::*};
use sea_orm::EntityTrait;

use crate::{
    util::{bearer_headers, into_json, sign_in},
    TestSetupExt,
};

fn notification(order_id: &str, gross_amount: &str, transaction_status: &str) -> NotificationDto {
    let status_code = "200";

    NotificationDto {
        order_id: order_id.to_string(),
        status_code: status_code.to_string(),
        gross_amount: gross_amount.to_string(),
        signature_key: payment_gateway::signature_key(
            order_id,
            status_code,
            gross_amount,
            TEST_SERVER_KEY,
        ),
        transaction_status: transaction_status.to_string(),
        fraud_status: None,
        payment_type: Some("bank_transfer".to_string()),
        transaction_id: Some("b7a1e5ad-7c5f-4a8f-9d1e-3f6e1c2d4a5b".to_string()),
    }
}

mod create_payment {
    use super::*;

    #[tokio::test]
    /// Expect 201 with a pending transaction and the Snap token
    async fn creates_pending_transaction_with_snap_token() -> Result<(), TestError> {
        let mut test = test_setup_with_billing_tables!()?;
        let (owner, tenant, _kos, _sewa, tagihan) = test.insert_rental_chain().await?;
        test.with_snap_transaction_endpoint(None, 1);
        let state = test.into_app_state();
        let headers = bearer_headers(&state, tenant.id);

        let form = CreatePaymentDto {
            tagihan_id: Some(tagihan.id),
            ..Default::default()
        };
        let result = create_payment(State(state), headers, test.session.clone(), Json(form)).await;

        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["transaction"]["payment_status"], "pending");
        assert_eq!(body["data"]["transaction"]["amount"], tagihan.amount);
        assert_eq!(body["data"]["transaction"]["user_penyedia_id"], owner.id);
        assert_eq!(body["data"]["midtrans"]["token"], TEST_SNAP_TOKEN);
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect the transaction to be kept with a null `midtrans` when Snap fails
    async fn keeps_transaction_when_gateway_fails() -> Result<(), TestError> {
        let mut test = test_setup_with_billing_tables!()?;
        let (_owner, tenant, _kos, _sewa, tagihan) = test.insert_rental_chain().await?;
        test.with_snap_error_endpoint(1);
        let state = test.into_app_state();
        let headers = bearer_headers(&state, tenant.id);

        let form = CreatePaymentDto {
            tagihan_id: Some(tagihan.id),
            ..Default::default()
        };
        let result = create_payment(State(state), headers, test.session.clone(), Json(form)).await;

        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(body["data"]["midtrans"].is_null());
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 403 when paying another tenant's invoice and 409 for a paid invoice
    async fn rejects_foreign_and_paid_invoices() -> Result<(), TestError> {
        let test = test_setup_with_billing_tables!()?;
        let (_owner, tenant, _kos, sewa, tagihan) = test.insert_rental_chain().await?;
        let stranger = test
            .insert_user_with_role("lain@example.com", "penyewa")
            .await?;
        let paid = test
            .insert_tagihan(sewa.id, sewa.start_date, sewa.monthly_price, "paid")
            .await?;
        let state = test.into_app_state();

        let form = CreatePaymentDto {
            tagihan_id: Some(tagihan.id),
            ..Default::default()
        };
        let headers = bearer_headers(&state, stranger.id);
        let result = create_payment(State(state.clone()), headers, test.session.clone(), Json(form)).await;
        let (status, _) = into_json(result).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let form = CreatePaymentDto {
            tagihan_id: Some(paid.id),
            ..Default::default()
        };
        let headers = bearer_headers(&state, tenant.id);
        let result = create_payment(State(state), headers, test.session.clone(), Json(form)).await;
        let (status, _) = into_json(result).await;
        assert_eq!(status, StatusCode::CONFLICT);

        Ok(())
    }
}

mod confirm_payment {
    use super::*;

    #[tokio::test]
    /// Expect a non-success status to change nothing
    async fn non_success_status_changes_nothing() -> Result<(), TestError> {
        let test = test_setup_with_billing_tables!()?;
        let (owner, tenant, _kos, _sewa, tagihan) = test.insert_rental_chain().await?;
        let transaction = test
            .insert_transaction(
                Some(tagihan.id),
                tenant.id,
                owner.id,
                tagihan.amount,
                "INV-20250101-0001",
                "pending",
                Utc::now().naive_utc(),
            )
            .await?;
        let state = test.into_app_state();
        let headers = bearer_headers(&state, tenant.id);

        let form = ConfirmPaymentDto {
            order_id: transaction.invoice_number.clone(),
            status: "pending".to_string(),
            transaction_status: None,
        };
        let result = confirm_payment(State(state), headers, test.session.clone(), Json(form)).await;

        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"].is_null());
        assert_eq!(body["message"], "Payment status noted, no change");

        Ok(())
    }

    #[tokio::test]
    /// Expect a success status to mark the transaction and invoice paid
    async fn success_marks_transaction_and_invoice_paid() -> Result<(), TestError> {
        let test = test_setup_with_billing_tables!()?;
        let (owner, tenant, _kos, _sewa, tagihan) = test.insert_rental_chain().await?;
        let transaction = test
            .insert_transaction(
                Some(tagihan.id),
                tenant.id,
                owner.id,
                tagihan.amount,
                "INV-20250101-0002",
                "pending",
                Utc::now().naive_utc(),
            )
            .await?;
        let state = test.into_app_state();
        let headers = bearer_headers(&state, tenant.id);

        let form = ConfirmPaymentDto {
            order_id: transaction.invoice_number.clone(),
            status: "success".to_string(),
            transaction_status: Some("settlement".to_string()),
        };
        let result = confirm_payment(State(state), headers, test.session.clone(), Json(form)).await;

        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["payment_status"], "paid");
        let tagihan = entity::prelude::Tagihan::find_by_id(tagihan.id)
            .one(&test.state.db)
            .await?
            .unwrap();
        assert_eq!(tagihan.status, "paid");

        Ok(())
    }
}

mod list_transactions {
    use super::*;

    #[tokio::test]
    /// Expect owners to see transactions paid to them and strangers to see none
    async fn scopes_transactions_by_role() -> Result<(), TestError> {
        let test = test_setup_with_billing_tables!()?;
        let (owner, tenant, _kos, _sewa, tagihan) = test.insert_rental_chain().await?;
        let stranger = test
            .insert_user_with_role("lain@example.com", "penyewa")
            .await?;
        test.insert_transaction(
            Some(tagihan.id),
            tenant.id,
            owner.id,
            tagihan.amount,
            "INV-20250101-0003",
            "pending",
            Utc::now().naive_utc(),
        )
        .await?;
        let state = test.into_app_state();

        sign_in(&test, owner.id).await?;
        let result = list_transactions(State(state.clone()), HeaderMap::new(), test.session.clone()).await;
        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

        let headers = bearer_headers(&state, stranger.id);
        let result = list_transactions(State(state), headers, test.session.clone()).await;
        let (_, body) = into_json(result).await;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(0));

        Ok(())
    }
}

mod webhook {
    use super::*;

    #[tokio::test]
    /// Expect a settlement notification to mark the transaction and invoice paid, twice over
    async fn settlement_marks_paid_idempotently() -> Result<(), TestError> {
        let test = test_setup_with_billing_tables!()?;
        let (owner, tenant, _kos, _sewa, tagihan) = test.insert_rental_chain().await?;
        let transaction = test
            .insert_transaction(
                Some(tagihan.id),
                tenant.id,
                owner.id,
                tagihan.amount,
                "INV-20250101-0004",
                "pending",
                Utc::now().naive_utc(),
            )
            .await?;
        let state = test.into_app_state();

        for _ in 0..2 {
            let payload = notification(&transaction.invoice_number, "1000000.00", "settlement");
            let result = midtrans_notification(State(state.clone()), Json(payload)).await;
            let (status, body) = into_json(result).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["success"], true);
        }

        let transaction = entity::prelude::Transactions::find_by_id(transaction.id)
            .one(&test.state.db)
            .await?
            .unwrap();
        assert_eq!(transaction.payment_status, "paid");
        assert_eq!(transaction.mitrans_status.as_deref(), Some("settlement"));
        assert_eq!(transaction.payment_method, "bank_transfer");
        let tagihan = entity::prelude::Tagihan::find_by_id(tagihan.id)
            .one(&test.state.db)
            .await?
            .unwrap();
        assert_eq!(tagihan.status, "paid");

        Ok(())
    }

    #[tokio::test]
    /// Expect 403 and no change when the signature does not match
    async fn rejects_invalid_signature() -> Result<(), TestError> {
        let test = test_setup_with_billing_tables!()?;
        let (owner, tenant, _kos, _sewa, tagihan) = test.insert_rental_chain().await?;
        let transaction = test
            .insert_transaction(
                Some(tagihan.id),
                tenant.id,
                owner.id,
                tagihan.amount,
                "INV-20250101-0005",
                "pending",
                Utc::now().naive_utc(),
            )
            .await?;
        let state = test.into_app_state();

        let mut payload = notification(&transaction.invoice_number, "1000000.00", "settlement");
        payload.gross_amount = "1.00".to_string();
        let result = midtrans_notification(State(state), Json(payload)).await;

        let (status, body) = into_json(result).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "Invalid signature");
        let transaction = entity::prelude::Transactions::find_by_id(transaction.id)
            .one(&test.state.db)
            .await?
            .unwrap();
        assert_eq!(transaction.payment_status, "pending");

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for an order with no transaction
    async fn unknown_order_is_not_found() -> Result<(), TestError> {
        let test = test_setup_with_billing_tables!()?;
        let state = test.into_app_state();

        let payload = notification("INV-UNKNOWN", "1000000.00", "settlement");
        let result = midtrans_notification(State(state), Json(payload)).await;

        let (status, _) = into_json(result).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        Ok(())
    }
}
