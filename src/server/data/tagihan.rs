use chrono::{Datelike, NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::{
    model::{
        billing::InvoiceStatus,
        db::{SewaModel, TagihanModel},
    },
    util::time::first_day_of_month,
};

pub struct TagihanRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagihanRepository<'a, C> {
    /// Creates a new instance of [`TagihanRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one unpaid invoice per billing date in a single statement
    ///
    /// Each invoice is due on the first day of its billing month.
    pub async fn insert_many(
        &self,
        sewa_id: i32,
        billing_dates: &[NaiveDate],
        amount: i64,
    ) -> Result<(), DbErr> {
        if billing_dates.is_empty() {
            return Ok(());
        }

        let now = Utc::now().naive_utc();
        let invoices = billing_dates
            .iter()
            .map(|date| entity::tagihan::ActiveModel {
                sewa_id: ActiveValue::Set(sewa_id),
                billing_month: ActiveValue::Set(date.month() as i32),
                billing_year: ActiveValue::Set(date.year()),
                amount: ActiveValue::Set(amount),
                due_date: ActiveValue::Set(first_day_of_month(*date)),
                status: ActiveValue::Set(InvoiceStatus::Unpaid.as_str().to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::Tagihan::insert_many(invoices)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Invoices of one lease in billing order
    pub async fn list_for_sewa(&self, sewa_id: i32) -> Result<Vec<TagihanModel>, DbErr> {
        entity::prelude::Tagihan::find()
            .filter(entity::tagihan::Column::SewaId.eq(sewa_id))
            .order_by_asc(entity::tagihan::Column::BillingYear)
            .order_by_asc(entity::tagihan::Column::BillingMonth)
            .all(self.db)
            .await
    }

    /// Invoice together with the lease it bills
    pub async fn get_with_sewa(
        &self,
        tagihan_id: i32,
    ) -> Result<Option<(TagihanModel, Option<SewaModel>)>, DbErr> {
        entity::prelude::Tagihan::find_by_id(tagihan_id)
            .find_also_related(entity::prelude::Sewa)
            .one(self.db)
            .await
    }

    /// Every invoice of every lease held by the tenant, with its lease
    pub async fn list_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(TagihanModel, Option<SewaModel>)>, DbErr> {
        entity::prelude::Tagihan::find()
            .find_also_related(entity::prelude::Sewa)
            .filter(entity::sewa::Column::UserPenyewaId.eq(user_id))
            .order_by_desc(entity::tagihan::Column::BillingYear)
            .order_by_desc(entity::tagihan::Column::BillingMonth)
            .order_by_desc(entity::tagihan::Column::Id)
            .all(self.db)
            .await
    }

    /// Marks the invoice paid, returning the number of rows changed
    pub async fn mark_paid(&self, tagihan_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Tagihan::update_many()
            .col_expr(
                entity::tagihan::Column::Status,
                Expr::value(InvoiceStatus::Paid.as_str()),
            )
            .col_expr(
                entity::tagihan::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::tagihan::Column::Id.eq(tagihan_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count_unpaid_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Tagihan::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::tagihan::Relation::Sewa.def(),
            )
            .filter(entity::sewa::Column::UserPenyewaId.eq(user_id))
            .filter(entity::tagihan::Column::Status.eq(InvoiceStatus::Unpaid.as_str()))
            .count(self.db)
            .await
    }
}
