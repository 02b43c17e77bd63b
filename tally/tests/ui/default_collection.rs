use serde::{Deserialize, Serialize};
use tally::{Record, RecordId, Timestamp};

#[derive(Record, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SupportTicket {
    #[key]
    id: RecordId,
    subject: String,
    #[created]
    opened: Timestamp,
}

fn main() {
    assert_eq!(SupportTicket::COLLECTION, "support_tickets");
    let _patch = SupportTicketPatch::default();
}
