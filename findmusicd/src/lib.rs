pub mod router;
pub mod startup;
