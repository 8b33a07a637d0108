// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use msamerge::errors::MsaError;

fn main() -> Result<(), MsaError> {
    msamerge::run()
}
