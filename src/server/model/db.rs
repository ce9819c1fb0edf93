//! Database model type aliases.

pub type UserModel = entity::app_user::Model;
pub type RoleModel = entity::role::Model;
pub type KosModel = entity::kos::Model;
pub type GambarKosModel = entity::gambar_kos::Model;
pub type UserLikeModel = entity::user_likes::Model;

/// Lease of a kos by a tenant
pub type SewaModel = entity::sewa::Model;

/// Monthly invoice belonging to a lease
pub type TagihanModel = entity::tagihan::Model;

/// Payment attempt for an invoice, tracked against the payment gateway by
/// its `invoice_number`
pub type TransactionModel = entity::transactions::Model;

pub type ProfilePenyewaModel = entity::profile_penyewa::Model;

mod convert {
    use super::{
        GambarKosModel, KosModel, ProfilePenyewaModel, SewaModel, TagihanModel,
        TransactionModel, UserModel,
    };
    use crate::{
        model::{
            kos::{GambarDto, KosDto},
            payment::TransactionDto,
            profile::ProfileDto,
            rental::{SewaDto, TagihanDto},
            user::UserDto,
        },
        server::util::facility::split_list,
    };

    impl From<UserModel> for UserDto {
        fn from(user: UserModel) -> Self {
            Self {
                id: user.id,
                email: user.email,
                name: user.name,
                phone: user.phone,
                avatar_url: user.avatar_url,
                created_at: user.created_at,
            }
        }
    }

    impl From<GambarKosModel> for GambarDto {
        fn from(image: GambarKosModel) -> Self {
            Self {
                id: image.id,
                kos_id: image.kos_id,
                tipe_gambar_id: image.tipe_gambar_id,
                url_gambar: image.url_gambar,
            }
        }
    }

    impl KosDto {
        /// Builds the listing DTO, keeping only the images that belong to it
        pub fn from_model(kos: KosModel, images: &[GambarKosModel]) -> Self {
            let images = images
                .iter()
                .filter(|image| image.kos_id == kos.id)
                .cloned()
                .map(GambarDto::from)
                .collect();

            Self {
                id: kos.id,
                user_id: kos.user_id,
                fasilitas_kos: split_list(kos.fasilitas_kos.as_deref()),
                fasilitas_kamar: split_list(kos.fasilitas_kamar.as_deref()),
                fasilitas_kamar_mandi: split_list(kos.fasilitas_kamar_mandi.as_deref()),
                fasilitas_parkir: split_list(kos.fasilitas_parkir.as_deref()),
                peraturan_kos: split_list(kos.peraturan_kos.as_deref()),
                name: kos.name,
                address: kos.address,
                city: kos.city,
                location: kos.location,
                description: kos.description,
                gender_type: kos.gender_type,
                monthly_price: kos.monthly_price,
                yearly_price: kos.yearly_price,
                deposit_price: kos.deposit_price,
                admin_fee: kos.admin_fee,
                total_rooms: kos.total_rooms,
                available_rooms: kos.available_rooms,
                electricity_type: kos.electricity_type,
                water_type: kos.water_type,
                room_size: kos.room_size,
                nomor_pemilik: kos.nomor_pemilik,
                property_status: kos.property_status,
                is_featured: kos.is_featured,
                view_count: kos.view_count,
                images,
                created_at: kos.created_at,
                updated_at: kos.updated_at,
            }
        }
    }

    impl From<SewaModel> for SewaDto {
        fn from(sewa: SewaModel) -> Self {
            Self {
                id: sewa.id,
                kos_id: sewa.kos_id,
                user_penyewa_id: sewa.user_penyewa_id,
                start_date: sewa.start_date,
                end_date: sewa.end_date,
                monthly_price: sewa.monthly_price,
                status: sewa.status,
            }
        }
    }

    impl From<TagihanModel> for TagihanDto {
        fn from(tagihan: TagihanModel) -> Self {
            Self {
                id: tagihan.id,
                sewa_id: tagihan.sewa_id,
                billing_month: tagihan.billing_month,
                billing_year: tagihan.billing_year,
                amount: tagihan.amount,
                due_date: tagihan.due_date,
                status: tagihan.status,
            }
        }
    }

    impl From<TransactionModel> for TransactionDto {
        fn from(transaction: TransactionModel) -> Self {
            Self {
                id: transaction.id,
                tagihan_id: transaction.tagihan_id,
                kos_id: transaction.kos_id,
                user_penyewa_id: transaction.user_penyewa_id,
                user_penyedia_id: transaction.user_penyedia_id,
                amount: transaction.amount,
                payment_status: transaction.payment_status,
                payment_method: transaction.payment_method,
                invoice_number: transaction.invoice_number,
                mitrans_id: transaction.mitrans_id,
                mitrans_status: transaction.mitrans_status,
                notes: transaction.notes,
                created_at: transaction.created_at,
                updated_at: transaction.updated_at,
            }
        }
    }

    impl From<ProfilePenyewaModel> for ProfileDto {
        fn from(profile: ProfilePenyewaModel) -> Self {
            Self {
                user_id: profile.user_id,
                full_name: profile.full_name,
                phone_number: profile.phone_number,
                gender: profile.gender,
                date_of_birth: profile.date_of_birth,
                address: profile.address,
                emergency_contact: profile.emergency_contact,
                updated_at: profile.updated_at,
            }
        }
    }
}
