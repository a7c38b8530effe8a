//! Helpers for driving [`ReviewApp`] command chains without a terminal.

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::tui::messages::AppMsg;

/// Upper bound on the messages fed back by [`run_command_chain`].
const MAX_CHAIN_STEPS: usize = 16;

/// Awaits `cmd`, feeds the resulting message back into the app, and repeats
/// with any follow-up command until the chain ends.
///
/// Returns the number of messages delivered. Messages that are not
/// [`AppMsg`] values (such as bubbletea's quit message) end the chain.
pub async fn run_command_chain(app: &mut ReviewApp, cmd: Option<Cmd>) -> usize {
    let mut next = cmd;
    let mut delivered = 0_usize;

    while let Some(pending) = next.take() {
        if delivered >= MAX_CHAIN_STEPS {
            break;
        }
        let Some(msg) = pending.await else {
            break;
        };
        let Some(app_msg) = msg.downcast_ref::<AppMsg>() else {
            break;
        };
        delivered = delivered.saturating_add(1);
        next = app.handle_message(app_msg);
    }

    delivered
}

/// Awaits a single command and returns its message without delivering it.
pub async fn resolve_command(cmd: Cmd) -> Option<AppMsg> {
    let msg = cmd.await?;
    msg.downcast_ref::<AppMsg>().cloned()
}
