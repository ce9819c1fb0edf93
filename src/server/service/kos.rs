use sea_orm::{ActiveValue, DatabaseConnection};

use crate::{
    model::kos::{KosDto, KosForm},
    server::{
        data::{gambar::GambarKosRepository, kos::KosRepository, sewa::SewaRepository},
        error::{auth::AuthError, kos::KosError, validation::ValidationError, Error},
        model::{
            db::KosModel,
            listing::{ElectricityType, GenderType, PropertyStatus, WaterType},
            role::RoleName,
        },
        service::role::RoleService,
        storage::LocalStorage,
        util::{
            facility::join_list,
            validation::{is_valid_phone, normalize_phone},
        },
    },
};

/// A listing form that passed validation, with enums parsed and lists joined
#[derive(Debug, Clone, PartialEq)]
pub struct ValidKos {
    pub name: String,
    pub address: String,
    pub city: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub gender_type: GenderType,
    pub monthly_price: i64,
    pub yearly_price: Option<i64>,
    pub deposit_price: Option<i64>,
    pub admin_fee: Option<i64>,
    pub total_rooms: i32,
    pub available_rooms: i32,
    pub electricity_type: Option<ElectricityType>,
    pub water_type: Option<WaterType>,
    pub room_size: Option<String>,
    pub nomor_pemilik: String,
    pub property_status: PropertyStatus,
    pub is_featured: bool,
    pub fasilitas_kos: Option<String>,
    pub fasilitas_kamar: Option<String>,
    pub fasilitas_kamar_mandi: Option<String>,
    pub fasilitas_parkir: Option<String>,
    pub peraturan_kos: Option<String>,
}

impl ValidKos {
    /// Writes every form column onto `model`
    pub fn apply(self, model: &mut entity::kos::ActiveModel) {
        model.name = ActiveValue::Set(self.name);
        model.address = ActiveValue::Set(self.address);
        model.city = ActiveValue::Set(self.city);
        model.location = ActiveValue::Set(self.location);
        model.description = ActiveValue::Set(self.description);
        model.gender_type = ActiveValue::Set(self.gender_type.as_str().to_string());
        model.monthly_price = ActiveValue::Set(self.monthly_price);
        model.yearly_price = ActiveValue::Set(self.yearly_price);
        model.deposit_price = ActiveValue::Set(self.deposit_price);
        model.admin_fee = ActiveValue::Set(self.admin_fee);
        model.total_rooms = ActiveValue::Set(self.total_rooms);
        model.available_rooms = ActiveValue::Set(self.available_rooms);
        model.electricity_type =
            ActiveValue::Set(self.electricity_type.map(|e| e.as_str().to_string()));
        model.water_type = ActiveValue::Set(self.water_type.map(|w| w.as_str().to_string()));
        model.room_size = ActiveValue::Set(self.room_size);
        model.nomor_pemilik = ActiveValue::Set(self.nomor_pemilik);
        model.property_status = ActiveValue::Set(self.property_status.as_str().to_string());
        model.is_featured = ActiveValue::Set(self.is_featured);
        model.fasilitas_kos = ActiveValue::Set(self.fasilitas_kos);
        model.fasilitas_kamar = ActiveValue::Set(self.fasilitas_kamar);
        model.fasilitas_kamar_mandi = ActiveValue::Set(self.fasilitas_kamar_mandi);
        model.fasilitas_parkir = ActiveValue::Set(self.fasilitas_parkir);
        model.peraturan_kos = ActiveValue::Set(self.peraturan_kos);
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Missing(field));
    }

    Ok(value.to_string())
}

fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn non_negative(value: Option<i64>, field: &str) -> Result<Option<i64>, ValidationError> {
    match value {
        Some(v) if v < 0 => Err(ValidationError::Invalid(format!(
            "{} cannot be negative",
            field
        ))),
        other => Ok(other),
    }
}

fn parse_optional<T>(
    value: &Option<String>,
    field: &str,
    parse: fn(&str) -> Option<T>,
    vocabulary: fn() -> String,
) -> Result<Option<T>, ValidationError> {
    match optional_text(value) {
        None => Ok(None),
        Some(v) => parse(&v).map(Some).ok_or_else(|| {
            ValidationError::Invalid(format!("{} must be one of: {}", field, vocabulary()))
        }),
    }
}

/// Validates a listing form, reporting the first failing rule
pub fn validate_form(form: &KosForm) -> Result<ValidKos, ValidationError> {
    let name = required(&form.name, "Name")?;
    let address = required(&form.address, "Address")?;
    let city = required(&form.city, "City")?;

    let gender_type = GenderType::parse(form.gender_type.trim()).ok_or_else(|| {
        ValidationError::Invalid(format!(
            "Gender type must be one of: {}",
            GenderType::vocabulary()
        ))
    })?;

    if form.monthly_price < 0 {
        return Err(ValidationError::Invalid(
            "Monthly price cannot be negative".to_string(),
        ));
    }
    let yearly_price = non_negative(form.yearly_price, "Yearly price")?;
    let deposit_price = non_negative(form.deposit_price, "Deposit price")?;
    let admin_fee = non_negative(form.admin_fee, "Admin fee")?;

    if form.total_rooms < 1 {
        return Err(ValidationError::Invalid(
            "Total rooms must be at least 1".to_string(),
        ));
    }
    if form.available_rooms < 0 {
        return Err(ValidationError::Invalid(
            "Available rooms cannot be negative".to_string(),
        ));
    }
    if form.available_rooms > form.total_rooms {
        return Err(ValidationError::Invalid(
            "Available rooms cannot exceed total rooms".to_string(),
        ));
    }

    let electricity_type = parse_optional(
        &form.electricity_type,
        "Electricity type",
        ElectricityType::parse,
        ElectricityType::vocabulary,
    )?;
    let water_type = parse_optional(
        &form.water_type,
        "Water type",
        WaterType::parse,
        WaterType::vocabulary,
    )?;

    if form.nomor_pemilik.trim().is_empty() {
        return Err(ValidationError::Missing("Owner phone number"));
    }
    if !is_valid_phone(&form.nomor_pemilik) {
        return Err(ValidationError::Invalid(
            "Owner phone number must be a valid Indonesian mobile number".to_string(),
        ));
    }

    let property_status = parse_optional(
        &form.property_status,
        "Property status",
        PropertyStatus::parse,
        PropertyStatus::vocabulary,
    )?
    .unwrap_or(PropertyStatus::Active);

    Ok(ValidKos {
        name,
        address,
        city,
        location: optional_text(&form.location),
        description: optional_text(&form.description),
        gender_type,
        monthly_price: form.monthly_price,
        yearly_price,
        deposit_price,
        admin_fee,
        total_rooms: form.total_rooms,
        available_rooms: form.available_rooms,
        electricity_type,
        water_type,
        room_size: optional_text(&form.room_size),
        nomor_pemilik: normalize_phone(&form.nomor_pemilik),
        property_status,
        is_featured: form.is_featured.unwrap_or(false),
        fasilitas_kos: join_list(&form.fasilitas_kos),
        fasilitas_kamar: join_list(&form.fasilitas_kamar),
        fasilitas_kamar_mandi: join_list(&form.fasilitas_kamar_mandi),
        fasilitas_parkir: join_list(&form.fasilitas_parkir),
        peraturan_kos: join_list(&form.peraturan_kos),
    })
}

pub struct KosService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a LocalStorage,
}

impl<'a> KosService<'a> {
    /// Creates a new instance of [`KosService`]
    pub fn new(db: &'a DatabaseConnection, storage: &'a LocalStorage) -> Self {
        Self { db, storage }
    }

    /// Creates a listing owned by `user_id`, who must be an owner or admin
    pub async fn create(&self, user_id: i32, form: &KosForm) -> Result<KosDto, Error> {
        let can_create = RoleService::new(self.db)
            .has_any_role(user_id, &[RoleName::Pemilik, RoleName::Admin])
            .await?;
        if !can_create {
            return Err(AuthError::MissingRole("pemilik").into());
        }

        let valid = validate_form(form)?;

        let now = chrono::Utc::now().naive_utc();
        let mut model = entity::kos::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            view_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };
        valid.apply(&mut model);

        let kos = KosRepository::new(self.db).create(model).await?;

        tracing::info!("User ID {} created kos ID {}", user_id, kos.id);

        Ok(KosDto::from_model(kos, &[]))
    }

    /// Fetches a listing the user may modify, as its owner or as an admin
    pub async fn get_modifiable(&self, user_id: i32, kos_id: i32) -> Result<KosModel, Error> {
        let Some(kos) = KosRepository::new(self.db).get(kos_id).await? else {
            return Err(KosError::NotFound(kos_id).into());
        };

        if kos.user_id == user_id {
            return Ok(kos);
        }

        if RoleService::new(self.db)
            .has_role(user_id, RoleName::Admin)
            .await?
        {
            return Ok(kos);
        }

        Err(KosError::NotOwner { user_id, kos_id }.into())
    }

    pub async fn update(&self, user_id: i32, kos_id: i32, form: &KosForm) -> Result<KosDto, Error> {
        let kos = self.get_modifiable(user_id, kos_id).await?;
        let valid = validate_form(form)?;

        let mut model: entity::kos::ActiveModel = kos.into();
        valid.apply(&mut model);

        let kos = KosRepository::new(self.db).update(model).await?;
        let images = GambarKosRepository::new(self.db).list_by_kos(kos.id).await?;

        Ok(KosDto::from_model(kos, &images))
    }

    /// Deletes a listing and its stored images
    ///
    /// Listings referenced by a lease are kept, since their invoices and payments refer
    /// to them.
    pub async fn delete(&self, user_id: i32, kos_id: i32) -> Result<(), Error> {
        let kos = self.get_modifiable(user_id, kos_id).await?;

        if SewaRepository::new(self.db).count_for_kos(kos.id).await? > 0 {
            return Err(KosError::HasLeases(kos.id).into());
        }

        let images = GambarKosRepository::new(self.db).list_by_kos(kos.id).await?;
        for image in images {
            if let Err(e) = self.storage.remove(&image.object_name).await {
                tracing::warn!(
                    "Failed to remove stored image {} of kos ID {}: {}",
                    image.object_name,
                    kos.id,
                    e
                );
            }
        }

        KosRepository::new(self.db).delete(kos.id).await?;

        tracing::info!("User ID {} deleted kos ID {}", user_id, kos.id);

        Ok(())
    }

    pub async fn get(&self, kos_id: i32) -> Result<KosDto, Error> {
        let Some(kos) = KosRepository::new(self.db).get(kos_id).await? else {
            return Err(KosError::NotFound(kos_id).into());
        };
        let images = GambarKosRepository::new(self.db).list_by_kos(kos.id).await?;

        Ok(KosDto::from_model(kos, &images))
    }

    /// Listings of one owner with their images, newest first
    pub async fn list_for_owner(&self, owner_id: i32) -> Result<Vec<KosDto>, Error> {
        let kos = KosRepository::new(self.db).list_by_owner(owner_id).await?;

        let ids: Vec<i32> = kos.iter().map(|k| k.id).collect();
        let images = GambarKosRepository::new(self.db)
            .list_by_kos_ids(&ids)
            .await?;

        Ok(kos
            .into_iter()
            .map(|k| KosDto::from_model(k, &images))
            .collect())
    }
}
