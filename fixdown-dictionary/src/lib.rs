/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixDown Dictionary
//!
//! FIX data dictionary schema and QuickFIX XML parsing for FixDown.
//!
//! This crate provides:
//! - **Schema definitions**: Field, message, and component definitions with
//!   member lists in declaration order
//! - **Dictionary loading**: QuickFIX XML format parser

pub mod loader;
pub mod schema;

pub use schema::{ComponentDef, Dictionary, FieldDef, MemberRef, MessageDef, Version};
