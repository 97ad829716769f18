// Items in this module are only used in test code.

mod temp_work_dir;

pub(crate) use temp_work_dir::TempWorkDir;
