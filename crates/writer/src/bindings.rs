//! Off-ramp entry points via `alloy_sol_types::sol!`.
//!
//! Only the report submission functions are included.

use alloy_sol_types::sol;

sol! {
    /// OCR3-attested commit report submission.
    function commit(
        bytes32[2] reportContext,
        bytes report,
        bytes32[] rs,
        bytes32[] ss,
        bytes32 rawVs
    );

    /// Execution report submission. Execute reports rely on the commit
    /// attestation, so no signature arrays are taken here.
    function execute(bytes32[2] reportContext, bytes report);
}
