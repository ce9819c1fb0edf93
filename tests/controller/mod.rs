mod auth;
mod dashboard;
mod favorite;
mod kos;
mod payment;
mod profile;
mod rental;
mod router;
