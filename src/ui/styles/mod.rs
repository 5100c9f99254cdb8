// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the book window.

pub mod button;
pub mod container;
