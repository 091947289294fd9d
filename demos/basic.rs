use logurl::Normalizer;

fn main() {
    let mut normalizer = Normalizer::new();

    for raw in [
        "HTTP://www.Example.com:80/a/b/../c/index.html?&x=1&&y=2#top",
        "http: //global-labour-issues.suite101.com/article.cfm/panacea",
        "http://123.45.12.6/index.html",
        "-",
    ] {
        if let Err(err) = normalizer.scan(raw) {
            println!("{err}");
            continue;
        }
        if normalizer.should_discard() {
            println!("{raw:?} discarded");
            continue;
        }

        println!("{raw:?}");
        println!("  grouping:          {}", normalizer.grouping_form()); // example.com/a/c/?x=1&y=2
        println!("  reversed grouping: {}", normalizer.reversed_grouping_form()); // com.example/a/c/?x=1&y=2
        println!("  by path:           {}", normalizer.path_grouping_form()); // example.com/a/c/
        println!("  raw:               {}", normalizer.raw_form());
        println!("  linkable:          {}", normalizer.linkable_form());
        println!("  hostname:          {}", normalizer.hostname());
        println!("  document:          {}", normalizer.document());
    }
}
