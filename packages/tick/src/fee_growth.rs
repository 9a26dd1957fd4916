// Fee Growth Calculations

use crate::update::TickStore;

/// Fee growth per unit of liquidity accrued inside [lower, upper]
pub fn get_fee_growth_inside<S: TickStore>(
    store: &S,
    lower_tick: i32,
    upper_tick: i32,
    current_tick: i32,
    fee_growth_global_0: u128,
    fee_growth_global_1: u128,
) -> (u128, u128) {
    let lower_info = store.read_tick(lower_tick);
    let upper_info = store.read_tick(upper_tick);

    let (below_0, below_1) = if current_tick >= lower_tick {
        (lower_info.fee_growth_outside_0, lower_info.fee_growth_outside_1)
    } else {
        (
            fee_growth_global_0.wrapping_sub(lower_info.fee_growth_outside_0),
            fee_growth_global_1.wrapping_sub(lower_info.fee_growth_outside_1),
        )
    };

    let (above_0, above_1) = if current_tick < upper_tick {
        (upper_info.fee_growth_outside_0, upper_info.fee_growth_outside_1)
    } else {
        (
            fee_growth_global_0.wrapping_sub(upper_info.fee_growth_outside_0),
            fee_growth_global_1.wrapping_sub(upper_info.fee_growth_outside_1),
        )
    };

    (
        fee_growth_global_0.wrapping_sub(below_0).wrapping_sub(above_0),
        fee_growth_global_1.wrapping_sub(below_1).wrapping_sub(above_1),
    )
}
