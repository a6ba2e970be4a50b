use ziggurat_tables::{Distribution, StandardTables, constants::TABLE_LEN};

fn main() {
    for d in Distribution::ALL {
        let t: StandardTables = d.tables();
        if let Err(e) = t.validate(d.name) {
            eprintln!("{}", e);
            continue;
        }

        println!("# {} r={} v={}", d.name, d.r, d.v);
        // layer i spans [0, x[i]] between f[i] and f[i + 1]
        (1..TABLE_LEN - 1).for_each(|i| {
            let area = t.x[i] * (t.f[i + 1] - t.f[i]);
            println!("{} {} {} {}", i, t.x[i], t.f[i], area);
        });
    }
}
