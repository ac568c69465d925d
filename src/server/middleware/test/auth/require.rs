use super::*;

mod require_login;
mod require_venue_owner;
