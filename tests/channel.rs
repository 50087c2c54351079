mod tests {
    use shadow_stream_composer::channel::Channel;

    #[test]
    fn test_fifo_order() {
        let queue: Channel<u8, 4> = Channel::new();
        assert!(queue.is_empty());

        queue.send(1);
        queue.send(2);
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.receive(), Some(1));
        assert_eq!(queue.receive(), Some(2));
        assert_eq!(queue.receive(), None);
    }

    #[test]
    fn test_overflow_evicts_oldest() {
        let queue: Channel<u8, 2> = Channel::new();

        assert_eq!(queue.send(1), None);
        assert_eq!(queue.send(2), None);
        assert_eq!(queue.send(3), Some(1));

        assert_eq!(queue.receive(), Some(2));
        assert_eq!(queue.receive(), Some(3));
    }

    #[test]
    fn test_handles_share_the_queue() {
        let queue: Channel<u8, 2> = Channel::new();
        let sender = queue.sender();
        let receiver = queue.receiver();

        sender.send(9);
        assert_eq!(receiver.receive(), Some(9));
        assert_eq!(receiver.receive(), None);
    }
}
