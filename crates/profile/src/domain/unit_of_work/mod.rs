// crates/profile/src/domain/unit_of_work/mod.rs

mod profile_repositories;
mod unit_of_work;
mod unit_of_work_factory;

pub use profile_repositories::ProfileRepositories;
pub use unit_of_work::UnitOfWork;
pub use unit_of_work_factory::UnitOfWorkFactory;
