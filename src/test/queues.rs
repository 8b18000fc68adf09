use crate::net::{Packet, PacketStatus};
use crate::queue::{FifoQueue, PacketQueue};
use crate::sim::SimTime;

fn pkt(id: u64) -> Packet {
    Packet::new(id, SimTime(id), SimTime::from_millis(5))
}

#[test]
fn fifo_queue_preserves_insertion_order() {
    let mut q = FifoQueue::new();
    assert!(q.is_empty());

    for id in [3, 1, 2] {
        q.enqueue(pkt(id));
    }
    assert_eq!(q.len(), 3);

    assert_eq!(q.dequeue().expect("pkt").id, 3);
    assert_eq!(q.dequeue().expect("pkt").id, 1);
    assert_eq!(q.len(), 1);
    assert_eq!(q.dequeue().expect("pkt").id, 2);
    assert!(q.dequeue().is_none());
    assert!(q.is_empty());
}

#[test]
fn queued_packets_keep_waiting_status() {
    let mut q = FifoQueue::new();
    q.enqueue(pkt(1));
    let p = q.dequeue().expect("pkt");
    assert_eq!(p.status, PacketStatus::Waiting);
    assert_eq!(p.arrive_time, SimTime(1));
}
