use thiserror::Error;

/// Errors resolving a packet source subscription key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PacketKindError {
    /// The packet source named a packet this tracker does not consume
    #[error("Unknown downstream packet `{name}`")]
    UnknownPacket { name: String },
}
