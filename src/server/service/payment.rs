use chrono::{Duration, NaiveDateTime, Utc};
use payment_gateway::{
    model::{
        Callbacks, CustomerDetails, ItemDetails, Notification, SnapRequest, TransactionDetails,
    },
    FraudStatus, TransactionStatus,
};
use sea_orm::DatabaseConnection;

use crate::{
    model::payment::{
        ConfirmPaymentDto, CreatePaymentDto, NotificationDto, PaymentCreatedDto, SnapDto,
        TransactionDto,
    },
    server::{
        data::{
            kos::KosRepository,
            tagihan::TagihanRepository,
            transaction::{GatewayUpdate, NewTransaction, TransactionRepository},
        },
        error::{payment::PaymentError, validation::ValidationError, Error},
        model::{
            billing::{InvoiceStatus, PaymentStatus, DEFAULT_PAYMENT_METHOD},
            db::UserModel,
            role::RoleName,
        },
        service::role::RoleService,
        util::generate::invoice_number,
    },
};

/// Deep link prefix the mobile app registers for Snap redirects
pub const MOBILE_CALLBACK_BASE: &str = "app-kos://payment";

/// Status the mobile app reports after a completed Snap payment
pub const CONFIRMED_CLIENT_STATUS: &str = "success";

/// Hours Snap keeps a transaction payable by default
pub const PENDING_PAYMENT_EXPIRY_HOURS: i64 = 24;

/// Maps a gateway transaction status onto the local payment status
///
/// Returns `None` for statuses that should leave the local status unchanged, such as
/// refunds or statuses the gateway added later.
pub fn map_gateway_status(
    status: &TransactionStatus,
    fraud: Option<&FraudStatus>,
) -> Option<PaymentStatus> {
    match status {
        TransactionStatus::Capture => match fraud {
            Some(FraudStatus::Challenge) => Some(PaymentStatus::Pending),
            _ => Some(PaymentStatus::Paid),
        },
        TransactionStatus::Settlement => Some(PaymentStatus::Paid),
        TransactionStatus::Pending => Some(PaymentStatus::Pending),
        TransactionStatus::Deny
        | TransactionStatus::Cancel
        | TransactionStatus::Expire
        | TransactionStatus::Failure => Some(PaymentStatus::Failed),
        _ => None,
    }
}

impl From<NotificationDto> for Notification {
    fn from(dto: NotificationDto) -> Self {
        Self {
            order_id: dto.order_id,
            status_code: dto.status_code,
            gross_amount: dto.gross_amount,
            signature_key: dto.signature_key,
            transaction_status: dto.transaction_status,
            fraud_status: dto.fraud_status,
            payment_type: dto.payment_type,
            transaction_id: dto.transaction_id,
        }
    }
}

fn snap_request(user: &UserModel, order_id: &str, tagihan_id: i32, amount: i64) -> SnapRequest {
    let first_name = user
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| user.email.split('@').next().unwrap_or_default())
        .to_string();

    SnapRequest {
        transaction_details: TransactionDetails {
            order_id: order_id.to_string(),
            gross_amount: amount,
        },
        callbacks: Some(Callbacks {
            finish: format!("{}/finish", MOBILE_CALLBACK_BASE),
            error: format!("{}/error", MOBILE_CALLBACK_BASE),
            pending: format!("{}/pending", MOBILE_CALLBACK_BASE),
        }),
        customer_details: Some(CustomerDetails {
            first_name,
            email: user.email.clone(),
        }),
        item_details: vec![ItemDetails {
            id: tagihan_id.to_string(),
            price: amount,
            quantity: 1,
            name: format!("Tagihan Kos #{}", tagihan_id),
        }],
    }
}

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
    payment_client: &'a payment_gateway::Client,
}

impl<'a> PaymentService<'a> {
    /// Creates a new instance of [`PaymentService`]
    pub fn new(db: &'a DatabaseConnection, payment_client: &'a payment_gateway::Client) -> Self {
        Self { db, payment_client }
    }

    /// Starts payment of one of the user's unpaid invoices
    ///
    /// The pending transaction is recorded before Snap is called. If Snap cannot be
    /// reached the transaction is still returned, without payment page details.
    ///
    /// # Returns
    /// - `Ok(PaymentCreatedDto)`: The transaction and, when Snap answered, its token
    /// - `Err(Error::PaymentError)`: Invoice missing, not the user's, already paid, or
    ///   its listing owner could not be resolved
    pub async fn create_invoice_payment(
        &self,
        user: &UserModel,
        form: &CreatePaymentDto,
    ) -> Result<PaymentCreatedDto, Error> {
        let tagihan_id = form.tagihan_id.ok_or(ValidationError::Missing("Tagihan ID"))?;

        let Some((tagihan, Some(sewa))) = TagihanRepository::new(self.db)
            .get_with_sewa(tagihan_id)
            .await?
        else {
            return Err(PaymentError::InvoiceNotFound(tagihan_id).into());
        };

        if sewa.user_penyewa_id != user.id {
            return Err(PaymentError::InvoiceNotOwned {
                tagihan_id,
                user_id: user.id,
            }
            .into());
        }
        if tagihan.status == InvoiceStatus::Paid.as_str() {
            return Err(PaymentError::InvoiceAlreadyPaid(tagihan_id).into());
        }

        let Some(kos) = KosRepository::new(self.db).get(sewa.kos_id).await? else {
            return Err(PaymentError::OwnerNotFound(tagihan_id).into());
        };

        let order_id = invoice_number(Utc::now());
        let payment_method = form
            .payment_method
            .as_deref()
            .map(str::trim)
            .filter(|method| !method.is_empty())
            .unwrap_or(DEFAULT_PAYMENT_METHOD);

        let transaction = TransactionRepository::new(self.db)
            .create(NewTransaction {
                tagihan_id: Some(tagihan.id),
                kos_id: Some(kos.id),
                user_penyewa_id: user.id,
                user_penyedia_id: kos.user_id,
                amount: tagihan.amount,
                payment_method,
                invoice_number: &order_id,
                notes: form.notes.clone(),
            })
            .await?;

        let request = snap_request(user, &order_id, tagihan.id, tagihan.amount);
        let midtrans = match self.payment_client.create_transaction(&request).await {
            Ok(snap) => Some(SnapDto {
                token: snap.token,
                redirect_url: snap.redirect_url,
            }),
            Err(e) => {
                tracing::error!(
                    "Failed to create Snap transaction for order {}: {}",
                    order_id,
                    e
                );

                None
            }
        };

        Ok(PaymentCreatedDto {
            transaction: transaction.into(),
            midtrans,
        })
    }

    /// Applies the mobile app's payment confirmation
    ///
    /// Only a `success` status changes anything, returning `Ok(None)` otherwise.
    pub async fn confirm_payment(
        &self,
        user_id: i32,
        form: &ConfirmPaymentDto,
    ) -> Result<Option<TransactionDto>, Error> {
        if form.status != CONFIRMED_CLIENT_STATUS {
            return Ok(None);
        }

        let transaction_repository = TransactionRepository::new(self.db);

        let transaction = transaction_repository
            .find_by_invoice_number(&form.order_id)
            .await?
            .filter(|transaction| transaction.user_penyewa_id == user_id)
            .ok_or_else(|| PaymentError::TransactionNotFound(form.order_id.clone()))?;

        let mitrans_status = form
            .transaction_status
            .as_deref()
            .map(str::trim)
            .filter(|status| !status.is_empty());
        let transaction = transaction_repository
            .mark_paid(transaction, mitrans_status)
            .await?;
        if let Some(tagihan_id) = transaction.tagihan_id {
            TagihanRepository::new(self.db).mark_paid(tagihan_id).await?;
        }

        tracing::info!(
            "User ID {} confirmed payment of order {}",
            user_id,
            transaction.invoice_number
        );

        Ok(Some(transaction.into()))
    }

    /// Applies a signed gateway notification to its transaction and invoice
    ///
    /// Repeated delivery of the same notification leaves the same final state. A
    /// failure to mark the invoice paid is only logged so the gateway does not keep
    /// redelivering.
    pub async fn handle_notification(
        &self,
        notification: &Notification,
    ) -> Result<TransactionDto, Error> {
        let valid = payment_gateway::verify_signature(
            &notification.order_id,
            &notification.status_code,
            &notification.gross_amount,
            self.payment_client.server_key(),
            &notification.signature_key,
        );
        if !valid {
            return Err(PaymentError::InvalidSignature(notification.order_id.clone()).into());
        }

        let gateway_status = TransactionStatus::parse(&notification.transaction_status);
        let fraud_status = notification.fraud_status.as_deref().map(FraudStatus::parse);
        let payment_status = map_gateway_status(&gateway_status, fraud_status.as_ref());

        let transaction_repository = TransactionRepository::new(self.db);
        let Some(transaction) = transaction_repository
            .find_by_invoice_number(&notification.order_id)
            .await?
        else {
            return Err(PaymentError::TransactionNotFound(notification.order_id.clone()).into());
        };

        let transaction = transaction_repository
            .update_from_gateway(
                transaction,
                GatewayUpdate {
                    payment_status,
                    mitrans_status: gateway_status.as_str(),
                    payment_method: notification.payment_type.as_deref(),
                    mitrans_id: notification.transaction_id.as_deref(),
                },
            )
            .await?;

        tracing::info!(
            "Order {} is {} at the gateway, local status {}",
            transaction.invoice_number,
            gateway_status,
            transaction.payment_status
        );

        if payment_status == Some(PaymentStatus::Paid) {
            if let Some(tagihan_id) = transaction.tagihan_id {
                if let Err(e) = TagihanRepository::new(self.db).mark_paid(tagihan_id).await {
                    tracing::error!(
                        "Failed to mark tagihan ID {} paid for order {}: {}",
                        tagihan_id,
                        transaction.invoice_number,
                        e
                    );
                }
            }
        }

        Ok(transaction.into())
    }

    /// Transactions visible to the user: all for admins, received ones for owners, and
    /// the user's own payments otherwise
    pub async fn list_transactions(&self, user_id: i32) -> Result<Vec<TransactionDto>, Error> {
        let role_service = RoleService::new(self.db);
        let transaction_repository = TransactionRepository::new(self.db);

        let transactions = if role_service.has_role(user_id, RoleName::Admin).await? {
            transaction_repository.list_all().await?
        } else if role_service.has_role(user_id, RoleName::Pemilik).await? {
            transaction_repository.list_by_penyedia(user_id).await?
        } else {
            transaction_repository.list_by_penyewa(user_id).await?
        };

        Ok(transactions.into_iter().map(Into::into).collect())
    }

    /// Fails transactions left pending past the gateway's payment window
    pub async fn expire_stale_transactions(&self, now: NaiveDateTime) -> Result<u64, Error> {
        let expired = TransactionRepository::new(self.db)
            .fail_stale_pending(now - Duration::hours(PENDING_PAYMENT_EXPIRY_HOURS))
            .await?;

        Ok(expired)
    }
}
