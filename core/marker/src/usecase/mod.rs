pub(crate) mod check;
pub(crate) mod expand;
pub(crate) mod install;
pub(crate) mod marks;
pub(crate) mod search;

pub(crate) use check::{CheckUseCase, DuplicateGroup};
pub(crate) use expand::ExpandUseCase;
pub(crate) use install::{InstallInput, InstallReport, InstallUseCase};
pub(crate) use marks::MarksUseCase;
pub(crate) use search::{Hit, SearchUseCase};
