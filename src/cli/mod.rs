pub mod check_orphans;
pub mod customize;
