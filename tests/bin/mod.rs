mod page_scroll_test;
