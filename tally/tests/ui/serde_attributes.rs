use serde::{Deserialize, Serialize};
use tally::{MemoryPersistence, Record, RecordId, Store, Timestamp};

#[derive(Record, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[collection("coupons")]
#[serde(rename_all = "camelCase")]
struct Coupon {
    #[key]
    id: RecordId,
    #[serde(rename = "code")]
    coupon_code: String,
    percent_off: u8,
    #[created]
    issued_at: Timestamp,
}

fn main() {
    let mut store = Store::new(MemoryPersistence::new());
    let coupon = store
        .add::<Coupon>(CouponDraft {
            coupon_code: "WELCOME".into(),
            percent_off: 10,
        })
        .unwrap();
    assert_eq!(coupon.id(), RecordId(1));
}
