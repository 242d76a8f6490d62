//! Tests against the storage seam and the resolution contract

mod helper;
