#[cfg(test)]
mod integration_tests {
    use crate::{BoundingRect, ObjectId, QuadNode, QuadTree, QuadTreeConfig};

    /// Number of nodes in the subtree holding `id` in their direct list.
    fn holders(root: &QuadNode, id: ObjectId) -> usize {
        root.nodes()
            .filter(|node| node.objects().iter().any(|entry| entry.id == id))
            .count()
    }

    #[test]
    fn test_clustered_inserts_and_straddling_object() {
        let domain = BoundingRect::new(0.0, 0.0, 800.0, 800.0);
        let config = QuadTreeConfig::new(8, 2);
        let mut tree = QuadTree::with_config(config, domain).unwrap();

        let a = tree.insert("a", BoundingRect::new(600.0, 600.0, 10.0, 10.0)).unwrap();
        let b = tree.insert("b", BoundingRect::new(610.0, 600.0, 10.0, 10.0)).unwrap();
        assert!(tree.root().is_leaf(), "Two objects stay on the root");
        let c = tree.insert("c", BoundingRect::new(600.0, 610.0, 10.0, 10.0)).unwrap();

        // Third insert overflows the root: it splits and keeps nothing.
        assert!(!tree.root().is_leaf());
        assert!(tree.root().objects().is_empty());
        for id in [a, b, c] {
            assert!(holders(tree.root(), id) >= 1, "Every object is held somewhere");
        }

        let straddler = tree.insert("d", BoundingRect::new(390.0, 390.0, 20.0, 20.0)).unwrap();
        assert_eq!(
            tree.root().quadrants(&BoundingRect::new(390.0, 390.0, 20.0, 20.0)).bits().count_ones(),
            4
        );

        let mut results = Vec::new();
        tree.retrieve(&domain, &mut results);
        let reported = results.iter().filter(|&&id| id == straddler).count();
        assert_eq!(reported, holders(tree.root(), straddler));
        assert!(reported >= 4, "Straddler is referenced from all four quadrants");

        for id in [a, b, c, straddler] {
            assert!(results.contains(&id));
        }

        // No node at the depth limit has children.
        for node in tree.root().nodes() {
            assert!(node.level() <= config.max_levels);
            if node.level() == config.max_levels {
                assert!(node.is_leaf());
            }
        }

        tree.clear();
        results.clear();
        tree.retrieve(&domain, &mut results);
        assert!(results.is_empty());
    }

    #[test]
    fn test_straddler_on_unsplit_root_is_reported_once() {
        let domain = BoundingRect::new(0.0, 0.0, 800.0, 800.0);
        let mut tree = QuadTree::new(8, domain).unwrap();
        let straddler = tree.insert(0u8, BoundingRect::new(390.0, 390.0, 20.0, 20.0)).unwrap();

        let mut results = Vec::new();
        tree.retrieve(&domain, &mut results);
        assert_eq!(results, vec![straddler]);
    }
}
