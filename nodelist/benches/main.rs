use nodelist::NodeList;

fn main() {
    divan::main();
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn push_back(n: usize) -> NodeList<usize> {
    let mut list = NodeList::new();
    for i in 0..n {
        list.push_back(i);
    }
    list
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn cursor_insert_middle(bencher: divan::Bencher, n: usize) {
    bencher
        .with_inputs(|| (0..n as i32).collect::<NodeList<i32>>())
        .bench_local_refs(|list| {
            let mid = list.len() / 2;
            if let Some(mut cursor) = list.cursor_at(mid) {
                for i in 0..1_000 {
                    cursor.insert_before(-i);
                }
            }
        });
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn get_last(bencher: divan::Bencher, n: usize) {
    let list: NodeList<usize> = (0..n).collect();
    bencher.bench_local(|| divan::black_box(&list).get(n - 1).copied());
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn iter_sum(bencher: divan::Bencher, n: usize) {
    let list: NodeList<i64> = (0..n as i64).collect();
    bencher.bench_local(|| divan::black_box(&list).iter().sum::<i64>());
}
