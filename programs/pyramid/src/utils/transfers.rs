use anchor_lang::prelude::*;
use crate::errors::PyramidErrorCode;

/// System Program transfer out of a signer wallet (take payments, pot top-ups).
///
/// The CPI fails when `from` cannot cover `amount`, or when the credit would
/// leave `to` as a new account below the rent-exempt minimum. Either way the
/// runtime aborts the transaction; the error is surfaced as `TransferFailed`
/// for the cases that reach us.
pub fn transfer_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, PyramidErrorCode::InvalidAmount);

    let accounts = anchor_lang::system_program::Transfer {
        from: from.clone(),
        to: to.clone(),
    };
    anchor_lang::system_program::transfer(CpiContext::new(system_program.clone(), accounts), amount)
        .map_err(|_| error!(PyramidErrorCode::TransferFailed))
}

/// Checks that an account holding `lamports`, of which `rent_floor` must stay
/// behind, can pay out `amount`.
pub fn payout_available(lamports: u64, rent_floor: u64, amount: u64) -> Result<()> {
    let available = lamports.saturating_sub(rent_floor);
    require!(available >= amount, PyramidErrorCode::TransferFailed);
    Ok(())
}

/// Moves lamports out of an account owned by this program, never below its
/// rent-exempt minimum.
pub fn payout_from_program_account<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let rent_floor = Rent::get()?.minimum_balance(from.data_len());
    payout_available(from.lamports(), rent_floor, amount)?;

    let to_balance = to
        .lamports()
        .checked_add(amount)
        .ok_or(PyramidErrorCode::TransferFailed)?;

    **from.try_borrow_mut_lamports()? -= amount;
    **to.try_borrow_mut_lamports()? = to_balance;

    Ok(())
}
