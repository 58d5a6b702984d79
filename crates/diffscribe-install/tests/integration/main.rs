// Copyright 2026 Oxide Computer Company

//! Integration tests for diffscribe-install.

mod helpers;
mod source_build;
