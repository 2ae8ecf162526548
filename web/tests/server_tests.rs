/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

#[test]
fn test_cors_configuration() {
    let cli = common::create_mock_cli();
    assert!(web::cors_layer(&cli).is_ok());

    let mut cli = common::create_mock_cli();
    cli.debug = false;
    cli.frontend_url = "https://atelier.example/".to_string();
    assert!(web::cors_layer(&cli).is_ok());

    cli.frontend_url = "https://atelier.example\n".to_string();
    assert!(web::cors_layer(&cli).is_err());
}
