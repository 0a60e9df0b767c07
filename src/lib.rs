//! Recruit Flow - Guided Recruitment Chat Flow
//!
//! This crate implements a guided multi-step conversational flow: language
//! selection, a main menu, job-offer browsing with localized descriptions,
//! and two structured data-collection forms (job application, contact
//! request). The message transport, the durable record store, and the
//! description document source are consumed through ports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
