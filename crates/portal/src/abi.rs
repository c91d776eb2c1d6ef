//! Bindings for the wave portal contract, generated from the packaged ABI.

#![allow(missing_docs)]

use alloy_sol_types::sol;

sol!(
    #[sol(rpc)]
    #[derive(Debug)]
    WavePortal,
    "abi/WavePortal.json"
);
