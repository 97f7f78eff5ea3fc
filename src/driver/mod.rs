use crate::flight_control::AxisCommand;
use crate::telemetry::NavData;
use crate::{event, log};
use async_trait::async_trait;
use strum_macros::Display;
use tokio::sync::mpsc;

#[derive(Debug, Display)]
pub enum DriverError {
    NotConnected,
    SendFailed(String),
}

impl std::error::Error for DriverError {}

/// Contract to the physical drone link. Implementations own their transport
/// and low-level keep-alive; every call is assumed idempotent and safe to
/// repeat.
#[async_trait]
pub trait DroneDriver: Send + Sync {
    async fn send_emergency(&self) -> Result<(), DriverError>;
    async fn send_takeoff(&self) -> Result<(), DriverError>;
    async fn send_land(&self) -> Result<(), DriverError>;
    async fn set_command(&self, cmd: AxisCommand) -> Result<(), DriverError>;
}

/// Bench driver: logs every call instead of talking to hardware. With the
/// navdata loopback attached it echoes the matching status code after each
/// mode call, so the mode machine sees transition completion the same way
/// it would from a live telemetry feed.
pub struct ConsoleDriver {
    nav_tx: Option<mpsc::Sender<NavData>>,
}

impl ConsoleDriver {
    pub fn new() -> Self {
        Self { nav_tx: None }
    }

    pub fn with_nav_loopback(nav_tx: mpsc::Sender<NavData>) -> Self {
        Self {
            nav_tx: Some(nav_tx),
        }
    }

    fn echo_status(&self, status: u8) {
        if let Some(tx) = &self.nav_tx {
            // try_send: a full feed must never stall a driver call
            let _ = tx.try_send(NavData {
                status,
                ..NavData::default()
            });
        }
    }
}

#[async_trait]
impl DroneDriver for ConsoleDriver {
    async fn send_emergency(&self) -> Result<(), DriverError> {
        log!("LINK emergency");
        self.echo_status(NavData::STATUS_EMERGENCY);
        Ok(())
    }

    async fn send_takeoff(&self) -> Result<(), DriverError> {
        log!("LINK takeoff");
        self.echo_status(NavData::STATUS_FLYING);
        Ok(())
    }

    async fn send_land(&self) -> Result<(), DriverError> {
        log!("LINK land");
        self.echo_status(NavData::STATUS_LANDED);
        Ok(())
    }

    async fn set_command(&self, cmd: AxisCommand) -> Result<(), DriverError> {
        event!("LINK set_command {cmd}");
        Ok(())
    }
}
