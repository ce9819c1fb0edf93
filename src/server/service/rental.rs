use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::rental::{CreateRentalDto, InvoiceDto, RentalCreatedDto},
    server::{
        data::{kos::KosRepository, sewa::SewaRepository, tagihan::TagihanRepository},
        error::{rental::RentalError, validation::ValidationError, Error},
        util::time::{billing_dates, parse_iso_date, MAX_BILLING_MONTHS},
    },
};

pub struct RentalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RentalService<'a> {
    /// Creates a new instance of [`RentalService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a lease and one unpaid invoice per billing month
    ///
    /// Invoices are inserted in a single batch after the lease. Should that insert
    /// fail, the lease is deleted again so no lease exists without invoices.
    ///
    /// # Returns
    /// - `Ok(RentalCreatedDto)`: The lease and the invoice of its first month
    /// - `Err(Error::ValidationError)`: Missing or invalid dates, or a lease too long to bill
    /// - `Err(Error::RentalError(RentalError::KosNotFound))`: The listing does not exist
    /// - `Err(Error::RentalError(RentalError::InvalidPrice))`: No positive monthly price
    /// - `Err(Error::RentalError(RentalError::InvoiceGenerationFailed))`: Invoice insert failed
    pub async fn create_rental(
        &self,
        user_id: i32,
        form: &CreateRentalDto,
    ) -> Result<RentalCreatedDto, Error> {
        let start_date = form
            .start_date
            .as_deref()
            .filter(|date| !date.trim().is_empty())
            .ok_or(ValidationError::Missing("Start date"))?;
        let start_date = parse_iso_date(start_date).ok_or_else(|| {
            ValidationError::Invalid("Start date must be a valid date (YYYY-MM-DD)".to_string())
        })?;

        let end_date = match form.end_date.as_deref().filter(|date| !date.trim().is_empty()) {
            None => None,
            Some(end_date) => Some(parse_iso_date(end_date).ok_or_else(|| {
                ValidationError::Invalid("End date must be a valid date (YYYY-MM-DD)".to_string())
            })?),
        };
        if end_date.is_some_and(|end_date| end_date < start_date) {
            return Err(
                ValidationError::Invalid("End date cannot be before start date".to_string()).into(),
            );
        }

        let Some(kos) = KosRepository::new(self.db).get(form.kos_id).await? else {
            return Err(RentalError::KosNotFound(form.kos_id).into());
        };

        let monthly_price = if kos.monthly_price > 0 {
            kos.monthly_price
        } else {
            form.monthly_price.unwrap_or(0)
        };
        if monthly_price <= 0 {
            return Err(RentalError::InvalidPrice(kos.id).into());
        }

        let dates = billing_dates(start_date, end_date);
        if dates.len() > MAX_BILLING_MONTHS {
            return Err(ValidationError::Invalid(format!(
                "Lease cannot span more than {} months",
                MAX_BILLING_MONTHS
            ))
            .into());
        }

        let sewa_repository = SewaRepository::new(self.db);
        let tagihan_repository = TagihanRepository::new(self.db);

        let sewa = sewa_repository
            .create(kos.id, user_id, start_date, end_date, monthly_price)
            .await?;

        if let Err(source) = tagihan_repository
            .insert_many(sewa.id, &dates, monthly_price)
            .await
        {
            if let Err(e) = sewa_repository.delete(sewa.id).await {
                tracing::error!(
                    "Failed to remove sewa ID {} after its invoices could not be created: {}",
                    sewa.id,
                    e
                );
            }

            return Err(RentalError::InvoiceGenerationFailed {
                sewa_id: sewa.id,
                source,
            }
            .into());
        }

        let invoices = tagihan_repository.list_for_sewa(sewa.id).await?;

        tracing::info!(
            "User ID {} leased kos ID {} as sewa ID {} with {} invoices",
            user_id,
            kos.id,
            sewa.id,
            invoices.len()
        );

        Ok(RentalCreatedDto {
            total_invoices: invoices.len(),
            tagihan: invoices.into_iter().next().map(Into::into),
            sewa: sewa.into(),
        })
    }

    /// The tenant's invoices with their lease and listing name, latest month first
    pub async fn list_invoices(&self, user_id: i32) -> Result<Vec<InvoiceDto>, Error> {
        let invoices = TagihanRepository::new(self.db).list_for_user(user_id).await?;

        let mut kos_ids: Vec<i32> = invoices
            .iter()
            .filter_map(|(_, sewa)| sewa.as_ref().map(|s| s.kos_id))
            .collect();
        kos_ids.sort_unstable();
        kos_ids.dedup();

        let kos_names: HashMap<i32, String> = KosRepository::new(self.db)
            .list_by_ids(&kos_ids)
            .await?
            .into_iter()
            .map(|kos| (kos.id, kos.name))
            .collect();

        Ok(invoices
            .into_iter()
            .filter_map(|(tagihan, sewa)| {
                let sewa = sewa?;

                Some(InvoiceDto {
                    kos_name: kos_names.get(&sewa.kos_id).cloned(),
                    tagihan: tagihan.into(),
                    sewa: sewa.into(),
                })
            })
            .collect())
    }
}
