//! End-to-end runs of the optics checks against the simulated DUT.

pub mod fixtures;

mod inventory {
    mod integration;
}

mod power_update {
    mod integration;
}
