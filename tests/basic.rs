use chanring::RingBuffer;

fn column(values: impl IntoIterator<Item = i32>) -> Vec<[i32; 1]> {
    values.into_iter().map(|v| [v]).collect()
}

fn values(rb: &RingBuffer<i32>) -> Vec<i32> {
    rb.get().into_vec()
}

#[test]
fn four_row_walkthrough() {
    let mut rb = RingBuffer::<i32>::new((4, 1)).expect("buffer");

    rb.append(&column([1, 2, 3])).unwrap();
    assert_eq!(values(&rb), vec![1, 2, 3]);
    assert!(!rb.is_full());

    rb.append(&column([4, 5])).unwrap();
    assert_eq!(values(&rb), vec![2, 3, 4, 5]);
    assert!(rb.is_full());

    rb.append(&column([6, 7, 8, 9, 10])).unwrap();
    assert_eq!(values(&rb), vec![7, 8, 9, 10]);
    assert!(rb.is_full());
}

#[test]
fn overwrite_drops_oldest_row() {
    let capacity = 8;
    let mut rb = RingBuffer::<i32>::new((capacity, 1)).unwrap();
    rb.append(&column(0..capacity as i32)).unwrap();
    rb.append(&column([99])).unwrap();

    let mut expected: Vec<i32> = (1..capacity as i32).collect();
    expected.push(99);
    assert_eq!(values(&rb), expected);
}

#[test]
fn exact_fill_in_two_steps() {
    let n = 9;
    let rows: Vec<[i32; 3]> = (0..n as i32).map(|i| [i, i * 10, i * 100]).collect();

    for k in 1..n {
        let mut rb = RingBuffer::<i32>::new((n, 3)).unwrap();
        rb.append(&rows[..k]).unwrap();
        assert!(!rb.is_full(), "full after first {k} rows");

        rb.append(&rows[k..]).unwrap();
        assert!(rb.is_full(), "not full after split at {k}");
        assert_eq!(rb.write_index(), 0, "split at {k}");

        let frames = rb.get();
        assert_eq!(frames.num_rows(), n);
        for (i, row) in frames.rows().enumerate() {
            assert_eq!(row, rows[i], "row {i} after split at {k}");
        }
    }
}

#[test]
fn multi_channel_rows_stay_intact_across_wrap() {
    let mut rb = RingBuffer::<f64>::new((3, 2)).unwrap();
    rb.append(&[[0.1, 0.2], [1.1, 1.2]]).unwrap();
    rb.append(&[[2.1, 2.2], [3.1, 3.2]]).unwrap();

    assert_eq!(
        rb.get().to_rows(),
        vec![vec![1.1, 1.2], vec![2.1, 2.2], vec![3.1, 3.2]]
    );
}
