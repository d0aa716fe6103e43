//! Database integration tests.

use super::*;
use crate::error::AppError;
use crate::models::paste::PasteRecord;
use crate::test_support::{insert_record, setup_temp_db};
use std::sync::{Arc, Barrier};
use std::thread;
