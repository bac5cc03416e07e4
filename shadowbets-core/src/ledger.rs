use crate::error::{Result, ShadowError};
use crate::profile::ProfileState;
use crate::types::Amount;
use std::sync::Arc;

/// Handle to the player's balance.
///
/// All handles share one balance; every successful mutation is persisted before
/// the call returns.
#[derive(Clone)]
pub struct WalletLedger {
    state: Arc<ProfileState>,
}

impl WalletLedger {
    pub(crate) fn new(state: Arc<ProfileState>) -> Self {
        Self { state }
    }

    pub fn balance(&self) -> Amount {
        self.state.read(|snapshot| snapshot.balance)
    }

    pub fn can_afford(&self, amount: Amount) -> bool {
        self.balance() >= amount
    }

    /// Debit `amount` if the balance covers it, returning the new balance.
    ///
    /// Fails with `InsufficientFunds` and changes nothing otherwise.
    pub async fn try_debit(&self, amount: Amount) -> Result<Amount> {
        let balance = self
            .state
            .commit(|snapshot| {
                let remaining = snapshot.balance.checked_sub(amount).ok_or(
                    ShadowError::InsufficientFunds {
                        need: amount.to_units(),
                        available: snapshot.balance.to_units(),
                    },
                )?;
                snapshot.balance = remaining;
                Ok(remaining)
            })
            .await?;

        tracing::debug!("Debited {}, balance now {}", amount, balance);
        Ok(balance)
    }

    /// Add a payout to the balance, returning the new balance.
    pub async fn credit(&self, amount: Amount) -> Result<Amount> {
        let balance = self
            .state
            .commit(|snapshot| {
                snapshot.balance = snapshot.balance.saturating_add(amount);
                Ok(snapshot.balance)
            })
            .await?;

        tracing::debug!("Credited {}, balance now {}", amount, balance);
        Ok(balance)
    }

    pub async fn reset(&self, to_amount: Amount) -> Result<()> {
        self.state
            .commit(|snapshot| {
                snapshot.balance = to_amount;
                Ok(())
            })
            .await
    }
}

impl std::fmt::Debug for WalletLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletLedger")
            .field("balance", &self.balance())
            .finish()
    }
}
