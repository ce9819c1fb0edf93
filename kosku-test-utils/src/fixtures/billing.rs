use chrono::{Datelike, NaiveDate, NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    /// Insert an active lease at the given monthly price.
    pub async fn insert_sewa(
        &self,
        kos_id: i32,
        user_penyewa_id: i32,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        monthly_price: i64,
    ) -> Result<entity::sewa::Model, TestError> {
        Ok(entity::prelude::Sewa::insert(entity::sewa::ActiveModel {
            kos_id: ActiveValue::Set(kos_id),
            user_penyewa_id: ActiveValue::Set(user_penyewa_id),
            start_date: ActiveValue::Set(start_date),
            end_date: ActiveValue::Set(end_date),
            monthly_price: ActiveValue::Set(monthly_price),
            status: ActiveValue::Set("active".to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.state.db)
        .await?)
    }

    /// Insert an invoice for the month `billing_date` falls in.
    pub async fn insert_tagihan(
        &self,
        sewa_id: i32,
        billing_date: NaiveDate,
        amount: i64,
        status: &str,
    ) -> Result<entity::tagihan::Model, TestError> {
        let now = Utc::now().naive_utc();
        let due_date = billing_date.with_day(1).unwrap_or(billing_date);

        Ok(
            entity::prelude::Tagihan::insert(entity::tagihan::ActiveModel {
                sewa_id: ActiveValue::Set(sewa_id),
                billing_month: ActiveValue::Set(billing_date.month() as i32),
                billing_year: ActiveValue::Set(billing_date.year()),
                amount: ActiveValue::Set(amount),
                due_date: ActiveValue::Set(due_date),
                status: ActiveValue::Set(status.to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }

    /// Insert a transaction for an invoice.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert_transaction(
        &self,
        tagihan_id: Option<i32>,
        user_penyewa_id: i32,
        user_penyedia_id: i32,
        amount: i64,
        invoice_number: &str,
        payment_status: &str,
        created_at: NaiveDateTime,
    ) -> Result<entity::transactions::Model, TestError> {
        Ok(
            entity::prelude::Transactions::insert(entity::transactions::ActiveModel {
                tagihan_id: ActiveValue::Set(tagihan_id),
                user_penyewa_id: ActiveValue::Set(user_penyewa_id),
                user_penyedia_id: ActiveValue::Set(user_penyedia_id),
                amount: ActiveValue::Set(amount),
                payment_status: ActiveValue::Set(payment_status.to_string()),
                payment_method: ActiveValue::Set("midtrans".to_string()),
                invoice_number: ActiveValue::Set(invoice_number.to_string()),
                mitrans_id: ActiveValue::Set(None),
                mitrans_status: ActiveValue::Set(Some("pending".to_string())),
                notes: ActiveValue::Set(None),
                created_at: ActiveValue::Set(created_at),
                updated_at: ActiveValue::Set(created_at),
                ..Default::default()
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }

    /// Insert owner, tenant, listing, lease and one unpaid invoice of 1,000,000.
    ///
    /// Returns `(owner, tenant, kos, sewa, tagihan)`.
    pub async fn insert_rental_chain(
        &self,
    ) -> Result<
        (
            entity::app_user::Model,
            entity::app_user::Model,
            entity::kos::Model,
            entity::sewa::Model,
            entity::tagihan::Model,
        ),
        TestError,
    > {
        let owner = self
            .insert_user_with_role("pemilik@example.com", "pemilik")
            .await?;
        let tenant = self
            .insert_user_with_role("penyewa@example.com", "penyewa")
            .await?;
        let kos = self.insert_kos(owner.id).await?;

        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();
        let sewa = self
            .insert_sewa(kos.id, tenant.id, start, None, kos.monthly_price)
            .await?;
        let tagihan = self
            .insert_tagihan(sewa.id, start, kos.monthly_price, "unpaid")
            .await?;

        Ok((owner, tenant, kos, sewa, tagihan))
    }
}
