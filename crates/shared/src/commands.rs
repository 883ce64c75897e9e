use std::fmt;
use std::str::FromStr;

/// The fixed fire-and-forget command tokens the backend understands. Sent
/// either as `POST /send-command/{token}` or as a raw text frame on the
/// rig socket; no response payload is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemCommand {
    StartErgo,
    StartXel,
    StartRvn,
    StartFish,
    StartFlux,
    StartBeam,
    StopMining,
    AdjustOverclock,
    RebootGpu,
    RebootRig,
    RebootAllRigs,
    UpdateSoftware,
}

impl SystemCommand {
    pub const ALL: [SystemCommand; 12] = [
        SystemCommand::StartErgo,
        SystemCommand::StartXel,
        SystemCommand::StartRvn,
        SystemCommand::StartFish,
        SystemCommand::StartFlux,
        SystemCommand::StartBeam,
        SystemCommand::StopMining,
        SystemCommand::AdjustOverclock,
        SystemCommand::RebootGpu,
        SystemCommand::RebootRig,
        SystemCommand::RebootAllRigs,
        SystemCommand::UpdateSoftware,
    ];

    pub fn as_token(&self) -> &'static str {
        match self {
            SystemCommand::StartErgo => "start_ergo",
            SystemCommand::StartXel => "start_xel",
            SystemCommand::StartRvn => "start_rvn",
            SystemCommand::StartFish => "start_fish",
            SystemCommand::StartFlux => "start_flux",
            SystemCommand::StartBeam => "start_beam",
            SystemCommand::StopMining => "stop_mining",
            SystemCommand::AdjustOverclock => "adjust_overclock",
            SystemCommand::RebootGpu => "reboot_gpu",
            SystemCommand::RebootRig => "reboot_rig",
            SystemCommand::RebootAllRigs => "reboot_all_rigs",
            SystemCommand::UpdateSoftware => "update_software",
        }
    }
}

impl fmt::Display for SystemCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown system command: {}", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for SystemCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SystemCommand::ALL
            .iter()
            .find(|cmd| cmd.as_token() == s)
            .copied()
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for cmd in SystemCommand::ALL {
            assert_eq!(cmd.as_token().parse::<SystemCommand>().unwrap(), cmd);
        }
    }

    #[test]
    fn unknown_token_is_rejected() {
        let err = "start_doge".parse::<SystemCommand>().unwrap_err();
        assert_eq!(err, UnknownCommand("start_doge".to_string()));
    }
}
